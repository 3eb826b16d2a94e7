//! Mixed-mode fallback projection.
//!
//! When no stable column shape can be inferred, every object is projected
//! into a generic index/value/type row. While all objects share one runtime
//! type the plan collapses to a single column headed by that type name; the
//! first divergence permanently reverts the batch to the three-column form.

use serde_json::Value;

use gridcast_plan::{ColumnPlan, PlanColumn, Role};

use crate::collab::DisplayResolver;
use crate::object::{value_display, SourceObject};
use crate::row::Row;

/// Header of the mixed-mode index column. The long word clashes with the
/// host's sort-order mark.
const INDEX_HEADER: &str = "##";

/// Rows and plan produced by a mixed-mode pass.
pub(crate) struct MixedProjection {
    pub rows: Vec<Row>,
    pub plan: ColumnPlan,
}

/// Projects a non-empty batch in mixed mode.
pub(crate) fn project_mixed(
    objects: &[SourceObject],
    resolver: &dyn DisplayResolver,
    enumeration_limit: usize,
) -> MixedProjection {
    let mut rows = Vec::with_capacity(objects.len());
    let mut same_type: Option<&str> = None;

    for (index, object) in objects.iter().enumerate() {
        let label = object.type_label();
        if index == 0 {
            same_type = Some(label);
        } else if same_type.is_some_and(|shared| shared != label) {
            // once disabled, tracking stays off for the rest of the batch
            same_type = None;
        }

        let value = display_value(object, resolver, enumeration_limit);
        rows.push(Row::literal(index, value, label.to_string()));
    }

    let plan = match same_type {
        Some(shared) => ColumnPlan {
            columns: vec![PlanColumn::new(shared, Role::Name)],
        },
        None => ColumnPlan {
            columns: vec![
                PlanColumn::new(INDEX_HEADER, Role::Sequence),
                PlanColumn::new("Value", Role::Name),
                PlanColumn::new("Type", Role::Description),
            ],
        },
    };

    MixedProjection { rows, plan }
}

/// Display string for one mixed-mode object.
fn display_value(
    object: &SourceObject,
    resolver: &dyn DisplayResolver,
    enumeration_limit: usize,
) -> String {
    if object.is_linear() {
        return object.display_string();
    }
    if let Value::Array(elements) = object.value() {
        return format_enumerable(elements, enumeration_limit);
    }
    if let Some(member) = resolver.display_member(object) {
        if let Some(value) = object.get(&member) {
            return value_display(value);
        }
    }
    object.display_string()
}

/// Truncated joined rendering for collection-like values.
fn format_enumerable(elements: &[Value], limit: usize) -> String {
    let shown: Vec<String> = elements.iter().take(limit).map(value_display).collect();
    let body = shown.join(", ");
    if elements.len() > limit {
        format!("{{{body}...}}")
    } else {
        format!("{{{body}}}")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::collab::ConventionalDisplay;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        #[test]
        fn plan_collapses_iff_all_types_agree(
            labels in proptest::collection::vec("[A-C]", 1..6),
        ) {
            let objects: Vec<SourceObject> = labels
                .iter()
                .map(|label| SourceObject::with_type(json!(1), label.as_str()))
                .collect();

            let projection = project_mixed(&objects, &ConventionalDisplay, 4);
            let all_same = labels.iter().all(|label| label == &labels[0]);
            let columns = projection.plan.columns.len();
            if all_same {
                prop_assert_eq!(columns, 1);
            } else {
                prop_assert_eq!(columns, 3);
            }
        }
    }
}
