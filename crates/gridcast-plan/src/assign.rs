//! Heuristic role assignment and column-count limiting.

use crate::descriptor::Descriptor;
use crate::pattern::{find_best, Pattern};
use crate::role::Role;

const NAME_PATTERNS: &[Pattern] = &[
    Pattern::Exact("Name"),
    Pattern::Suffix("Name"),
    Pattern::Exact("Id"),
    Pattern::Exact("Key"),
    Pattern::Suffix("Key"),
    Pattern::Suffix("Id"),
];

const DESCRIPTION_PATTERNS: &[Pattern] = &[
    Pattern::Exact("Description"),
    Pattern::Exact("Definition"),
];

const OWNER_PATTERNS: &[Pattern] = &[Pattern::Exact("Value"), Pattern::Exact("Status")];

/// Assigns the heuristic roles in fixed priority order.
///
/// The name bucket runs first, then description, then owner/status. A bucket
/// runs only while more than one candidate remains after the previously
/// successful buckets; skipping keeps a lone remaining column from being
/// collapsed into a role.
pub fn assign_roles(descriptors: &mut Vec<Descriptor>, maximum: usize) {
    let mut candidates = descriptors.len();

    if candidates > 1 && assign_role(descriptors, maximum, Role::Name, NAME_PATTERNS) {
        candidates -= 1;
    }
    if candidates > 1 && assign_role(descriptors, maximum, Role::Description, DESCRIPTION_PATTERNS) {
        candidates -= 1;
    }
    if candidates > 1 {
        assign_role(descriptors, maximum, Role::Owner, OWNER_PATTERNS);
    }
}

/// Assigns one role to the best matching descriptor, if any.
///
/// When the list is longer than `maximum`, the winner is relocated to the
/// first unassigned position ahead of the cut-off (shifting intervening
/// entries right) so the limiter cannot discard a role-bearing column while
/// a free slot exists ahead of the limit.
fn assign_role(
    descriptors: &mut Vec<Descriptor>,
    maximum: usize,
    role: Role,
    patterns: &[Pattern],
) -> bool {
    let Some(best) = find_best(descriptors, patterns) else {
        return false;
    };

    descriptors[best].kind = Some(role);

    if descriptors.len() <= maximum {
        return true;
    }

    let end = maximum.min(best);
    if let Some(free) = descriptors[..end].iter().position(|d| d.kind.is_none()) {
        let winner = descriptors.remove(best);
        descriptors.insert(free, winner);
    }

    true
}

/// Keeps the first `maximum` descriptors in original order, discards the
/// rest.
///
/// Applied after role assignment, so relocation has already protected
/// role-bearing descriptors where possible. Idempotent once the list fits.
pub fn truncate_columns(descriptors: &mut Vec<Descriptor>, maximum: usize) {
    if descriptors.len() > maximum {
        descriptors.truncate(maximum);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn singular_roles_never_repeat(
            names in proptest::collection::vec("[A-Za-z]{1,12}", 1..12),
            maximum in 1usize..10,
        ) {
            let mut list: Vec<Descriptor> = names.into_iter().map(Descriptor::new).collect();
            assign_roles(&mut list, maximum);

            for role in [Role::Name, Role::Description, Role::Owner] {
                let held = list.iter().filter(|d| d.kind == Some(role)).count();
                prop_assert!(held <= 1, "role {:?} held by {} descriptors", role, held);
            }
        }

        #[test]
        fn limiter_bounds_length_and_preserves_prefix(
            names in proptest::collection::vec("[A-Za-z]{1,8}", 0..16),
            maximum in 1usize..8,
        ) {
            let mut list: Vec<Descriptor> = names.into_iter().map(Descriptor::new).collect();
            let before = list.clone();
            truncate_columns(&mut list, maximum);

            prop_assert!(list.len() <= maximum);
            prop_assert_eq!(list.len(), before.len().min(maximum));
            prop_assert_eq!(&list[..], &before[..list.len()]);
        }
    }
}
