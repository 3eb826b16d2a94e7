//! Materialized display rows.

use std::sync::Arc;

use gridcast_plan::{ColumnPlan, ProjectionMap, Role};

use crate::object::{value_display, SourceObject};

/// One display row of a batch.
///
/// Map-backed rows keep the object and share the batch's projection map;
/// mixed-mode rows are self-contained literals. Either way a row is a
/// value-like projection: it does not own the raw collection it came from.
#[derive(Clone, Debug)]
pub enum Row {
    /// Projected through the batch's projection map.
    Mapped {
        /// The object the cells are read from.
        object: SourceObject,
        /// The map resolving roles to member names.
        map: Arc<ProjectionMap>,
    },
    /// Self-contained mixed-mode row.
    Literal {
        /// Zero-based position in the batch.
        index: usize,
        /// Display string for the value.
        value: String,
        /// Runtime type label.
        type_label: String,
    },
}

impl Row {
    pub(crate) fn mapped(object: SourceObject, map: Arc<ProjectionMap>) -> Row {
        Row::Mapped { object, map }
    }

    pub(crate) fn literal(index: usize, value: String, type_label: String) -> Row {
        Row::Literal {
            index,
            value,
            type_label,
        }
    }

    /// Cell text for a singular role, if this row provides one.
    pub fn cell(&self, role: Role) -> Option<String> {
        match self {
            Row::Mapped { object, map } => {
                let descriptor = map.slot(role)?;
                Some(member_text(object, &descriptor.name))
            }
            Row::Literal {
                index,
                value,
                type_label,
            } => match role {
                Role::Sequence => Some(index.to_string()),
                Role::Name => Some(value.clone()),
                Role::Description => Some(type_label.clone()),
                _ => None,
            },
        }
    }

    /// Cell text for the n-th extra column (map-backed rows only).
    pub fn extra(&self, index: usize) -> Option<String> {
        match self {
            Row::Mapped { object, map } => {
                let descriptor = map.extras.get(index)?;
                Some(member_text(object, &descriptor.name))
            }
            Row::Literal { .. } => None,
        }
    }

    /// Cells in plan order, one string per plan column.
    ///
    /// The plan and the row's map were built from the same descriptor list,
    /// so extra columns line up positionally.
    pub fn cells(&self, plan: &ColumnPlan) -> Vec<String> {
        let mut extra_index = 0;
        plan.columns
            .iter()
            .map(|column| {
                if column.kind == Role::Extra {
                    let cell = self.extra(extra_index);
                    extra_index += 1;
                    cell.unwrap_or_default()
                } else {
                    self.cell(column.kind).unwrap_or_default()
                }
            })
            .collect()
    }
}

fn member_text(object: &SourceObject, member: &str) -> String {
    object.get(member).map(value_display).unwrap_or_default()
}
