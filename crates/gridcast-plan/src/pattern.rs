//! Pattern matching for role candidates.
//!
//! A role is matched against descriptor names through a prioritized pattern
//! list, most-specific first. Matching proceeds by pattern priority, not
//! descriptor order: a later descriptor only displaces the current best when
//! it matches a strictly higher-priority pattern, and an exact match on the
//! top-priority pattern ends the scan immediately.

use crate::descriptor::Descriptor;

/// A name pattern for role matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Matches the whole field name, case-insensitively.
    Exact(&'static str),
    /// Matches a field name ending with the suffix, case-insensitively.
    Suffix(&'static str),
}

impl Pattern {
    /// True when the pattern matches `name`.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Pattern::Exact(pattern) => name.eq_ignore_ascii_case(pattern),
            Pattern::Suffix(tail) => ends_with_ignore_case(name, tail),
        }
    }
}

fn ends_with_ignore_case(name: &str, tail: &str) -> bool {
    name.len() >= tail.len()
        && name
            .get(name.len() - tail.len()..)
            .is_some_and(|end| end.eq_ignore_ascii_case(tail))
}

/// Finds the single best unassigned descriptor for a pattern list.
///
/// Returns the descriptor index, or `None` when no unassigned descriptor
/// matches any pattern.
pub fn find_best(descriptors: &[Descriptor], patterns: &[Pattern]) -> Option<usize> {
    let mut best_pattern = patterns.len();
    let mut best = None;

    'descriptors: for (index, descriptor) in descriptors.iter().enumerate() {
        if descriptor.kind.is_some() {
            continue;
        }

        for (priority, pattern) in patterns.iter().enumerate().take(best_pattern) {
            if !pattern.matches(&descriptor.name) {
                continue;
            }
            best = Some(index);
            // an exact top-priority match cannot be beaten
            if priority == 0 && matches!(pattern, Pattern::Exact(_)) {
                break 'descriptors;
            }
            best_pattern = priority;
            break;
        }
    }

    best
}
