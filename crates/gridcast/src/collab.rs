//! Collaborator seams: object sources, format registries, member access.
//!
//! The engine reaches every external dependency through one of these traits
//! so that nothing in the core touches process-wide state. Hosts implement
//! them; [`NoFormats`], [`ValueMembers`] and [`ConventionalDisplay`] are the
//! defaults a bare panel starts with.

use serde_json::Value;
use thiserror::Error;

use gridcast_plan::FormatColumn;

use crate::object::SourceObject;
use crate::row::Row;

/// Recoverable failure while fetching a batch.
///
/// Fetch failures degrade the batch to empty and surface as a notice; they
/// never abort the pass.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("object source failed: {message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    /// Creates a fetch failure with a host-facing message.
    pub fn new(message: impl Into<String>) -> SourceError {
        SourceError {
            message: message.into(),
        }
    }
}

/// Raw data for one batch: pre-built rows or raw objects.
#[derive(Debug, Clone)]
pub enum BatchData {
    /// Display-ready rows; installed unchanged.
    Rows(Vec<Row>),
    /// Raw objects to be projected.
    Objects(Vec<SourceObject>),
}

/// Yields the raw data for each batch.
pub trait ObjectSource {
    /// Fetches the next batch.
    fn fetch(&mut self) -> std::result::Result<BatchData, SourceError>;
}

/// Maps a runtime type name to a predefined column list.
pub trait FormatRegistry {
    /// The registered columns for a type, or `None` when unknown.
    fn lookup(&self, type_name: &str) -> Option<Vec<FormatColumn>>;
}

/// Registry that knows no formats.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFormats;

impl FormatRegistry for NoFormats {
    fn lookup(&self, _type_name: &str) -> Option<Vec<FormatColumn>> {
        None
    }
}

/// Enumerates the publicly exposed data members of one object.
///
/// Implementations own the filtering of method-like members; the engine
/// takes the returned names as-is, in order.
pub trait MemberSource {
    /// Ordered data-member names of `object`.
    fn members(&self, object: &SourceObject) -> Vec<String>;
}

/// Default member source: the keys of the object payload, in order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueMembers;

impl MemberSource for ValueMembers {
    fn members(&self, object: &SourceObject) -> Vec<String> {
        match object.value() {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }
}

/// Picks the most meaningful single member for mixed-mode display.
pub trait DisplayResolver {
    /// The member name to display for `object`, or `None`.
    fn display_member(&self, object: &SourceObject) -> Option<String>;
}

/// Default resolver: probes conventional identity members, case-insensitively.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConventionalDisplay;

const DISPLAY_MEMBERS: &[&str] = &["DisplayName", "Name", "Label", "Caption", "Id", "Key"];

impl DisplayResolver for ConventionalDisplay {
    fn display_member(&self, object: &SourceObject) -> Option<String> {
        let Value::Object(map) = object.value() else {
            return None;
        };
        for candidate in DISPLAY_MEMBERS {
            if let Some(member) = map.keys().find(|key| key.eq_ignore_ascii_case(candidate)) {
                return Some(member.clone());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_members_enumerates_object_keys_in_order() {
        let object = SourceObject::new(json!({"Pid": 1, "Name": "sh", "Cpu": 0.5}));
        assert_eq!(ValueMembers.members(&object), vec!["Pid", "Name", "Cpu"]);
    }

    #[test]
    fn value_members_is_empty_for_leaf_values() {
        let object = SourceObject::new(json!("leaf"));
        assert!(ValueMembers.members(&object).is_empty());
    }

    #[test]
    fn conventional_display_probes_in_priority_order() {
        let object = SourceObject::new(json!({"id": 7, "name": "box"}));
        assert_eq!(
            ConventionalDisplay.display_member(&object),
            Some("name".to_string())
        );

        let object = SourceObject::new(json!({"weight": 3}));
        assert_eq!(ConventionalDisplay.display_member(&object), None);
    }

    #[test]
    fn no_formats_reports_not_found() {
        assert!(NoFormats.lookup("Acme.Widget").is_none());
    }
}
