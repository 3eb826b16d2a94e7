//! Semantic column roles.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Semantic category of a display column.
///
/// Every role except [`Role::Extra`] is singular: it may be held by at most
/// one column per batch. The canonical codes (`N`, `Z`, `O`, `S`, `DC`, `DM`,
/// `DA`, `C`) are what format registries and pinned layouts use to tag
/// columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Primary name/identity column (`N`). First-priority heuristic.
    Name,
    /// Description/detail column (`Z`).
    Description,
    /// Owner/status column (`O`).
    Owner,
    /// Sequence/length/index column (`S`).
    Sequence,
    /// Creation timestamp column (`DC`).
    Created,
    /// Last-modified timestamp column (`DM`).
    Modified,
    /// Last-accessed timestamp column (`DA`).
    Accessed,
    /// Generic extra column (`C`); any number may appear.
    Extra,
}

impl Role {
    /// Parses a column kind code.
    ///
    /// Accepts the single-letter codes `N`, `Z`, `O`, `S`, `C` and the
    /// two-letter timestamp codes `DC`, `DM`, `DA`. A bare `D` or any other
    /// string is a configuration error.
    pub fn parse(code: &str) -> Result<Role> {
        match code {
            "N" => Ok(Role::Name),
            "Z" => Ok(Role::Description),
            "O" => Ok(Role::Owner),
            "S" => Ok(Role::Sequence),
            "DC" => Ok(Role::Created),
            "DM" => Ok(Role::Modified),
            "DA" => Ok(Role::Accessed),
            "C" => Ok(Role::Extra),
            other => Err(PlanError::InvalidKind(other.to_string())),
        }
    }

    /// Canonical code for this role.
    pub fn code(&self) -> &'static str {
        match self {
            Role::Name => "N",
            Role::Description => "Z",
            Role::Owner => "O",
            Role::Sequence => "S",
            Role::Created => "DC",
            Role::Modified => "DM",
            Role::Accessed => "DA",
            Role::Extra => "C",
        }
    }

    /// True for roles that may be held by at most one column per batch.
    pub fn is_singular(&self) -> bool {
        !matches!(self, Role::Extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_canonical_codes() {
        for code in ["N", "Z", "O", "S", "DC", "DM", "DA", "C"] {
            let role = Role::parse(code).unwrap();
            assert_eq!(role.code(), code);
        }
    }

    #[test]
    fn parse_rejects_bare_timestamp_code() {
        assert_eq!(
            Role::parse("D"),
            Err(PlanError::InvalidKind("D".to_string()))
        );
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert!(matches!(Role::parse("X"), Err(PlanError::InvalidKind(_))));
        assert!(matches!(Role::parse("DX"), Err(PlanError::InvalidKind(_))));
        assert!(matches!(Role::parse(""), Err(PlanError::InvalidKind(_))));
    }

    #[test]
    fn only_extra_is_plural() {
        assert!(!Role::Extra.is_singular());
        for role in [
            Role::Name,
            Role::Description,
            Role::Owner,
            Role::Sequence,
            Role::Created,
            Role::Modified,
            Role::Accessed,
        ] {
            assert!(role.is_singular());
        }
    }
}
