//! Dynamic object descriptions entering a batch.

use serde_json::Value;

/// An already-materialized structured object of arbitrary shape.
///
/// The payload is a [`serde_json::Value`]; an optional reported type name
/// stands in for the runtime type of the original object. JSON kinds map
/// onto the projection taxonomy: strings, numbers, booleans and nulls are
/// linear leaf values, arrays are collection-like, and objects are
/// structured values with enumerable members.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceObject {
    value: Value,
    type_name: Option<String>,
}

impl SourceObject {
    /// Wraps a value with no reported type name.
    pub fn new(value: Value) -> SourceObject {
        SourceObject {
            value,
            type_name: None,
        }
    }

    /// Wraps a value reporting a concrete runtime type name.
    pub fn with_type(value: Value, type_name: impl Into<String>) -> SourceObject {
        SourceObject {
            value,
            type_name: Some(type_name.into()),
        }
    }

    /// The underlying payload.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Reported runtime type name, if any.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Type label for display: the reported name, else the payload kind.
    pub fn type_label(&self) -> &str {
        self.type_name.as_deref().unwrap_or(match self.value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        })
    }

    /// True for opaque leaf values with no useful member breakdown.
    pub fn is_linear(&self) -> bool {
        matches!(
            self.value,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    /// True for collection-like values.
    pub fn is_iterable(&self) -> bool {
        self.value.is_array()
    }

    /// True for structured values with enumerable members.
    pub fn is_structured(&self) -> bool {
        self.value.is_object()
    }

    /// Member value by name, for structured payloads.
    pub fn get(&self, member: &str) -> Option<&Value> {
        self.value.get(member)
    }

    /// The value's own string conversion.
    pub fn display_string(&self) -> String {
        value_display(&self.value)
    }
}

/// Display conversion for a single value.
///
/// Strings render bare (no quotes), nulls render empty, everything else uses
/// its JSON rendering.
pub(crate) fn value_display(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_payload_kinds() {
        assert!(SourceObject::new(json!("text")).is_linear());
        assert!(SourceObject::new(json!(42)).is_linear());
        assert!(SourceObject::new(json!(true)).is_linear());
        assert!(SourceObject::new(json!(null)).is_linear());
        assert!(SourceObject::new(json!([1, 2])).is_iterable());
        assert!(SourceObject::new(json!({"a": 1})).is_structured());
    }

    #[test]
    fn type_label_prefers_the_reported_name() {
        let object = SourceObject::with_type(json!({"a": 1}), "Acme.Widget");
        assert_eq!(object.type_label(), "Acme.Widget");

        let object = SourceObject::new(json!({"a": 1}));
        assert_eq!(object.type_label(), "object");
    }

    #[test]
    fn display_string_renders_strings_bare() {
        assert_eq!(SourceObject::new(json!("plain")).display_string(), "plain");
        assert_eq!(SourceObject::new(json!(3.5)).display_string(), "3.5");
        assert_eq!(SourceObject::new(json!(null)).display_string(), "");
    }
}
