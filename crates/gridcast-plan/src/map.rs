//! Projection maps and column plans.

use serde::{Deserialize, Serialize};

use crate::descriptor::Descriptor;
use crate::error::{PlanError, Result};
use crate::role::Role;

/// Header of the placeholder column installed for an empty batch.
pub const EMPTY_HEADER: &str = "<empty>";

/// Resolved role-to-descriptor assignment for one batch.
///
/// Built once from a fully role-assigned descriptor list, immutable
/// afterwards, and owned exclusively by the batch that built it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectionMap {
    /// Primary name/identity column.
    pub name: Option<Descriptor>,
    /// Owner/status column.
    pub owner: Option<Descriptor>,
    /// Description/detail column.
    pub description: Option<Descriptor>,
    /// Sequence/length/index column.
    pub length: Option<Descriptor>,
    /// Creation timestamp column.
    pub created: Option<Descriptor>,
    /// Last-modified timestamp column.
    pub modified: Option<Descriptor>,
    /// Last-accessed timestamp column.
    pub accessed: Option<Descriptor>,
    /// Generic extra columns, order-preserving.
    pub extras: Vec<Descriptor>,
}

impl ProjectionMap {
    /// Builds the map from a role-assigned descriptor list.
    ///
    /// Descriptors still without a role are folded into the extra columns.
    /// Filling a singular slot twice is a configuration error, uniformly for
    /// every discovery path.
    pub fn build(descriptors: &[Descriptor]) -> Result<ProjectionMap> {
        let mut map = ProjectionMap::default();

        for descriptor in descriptors {
            let role = descriptor.kind.unwrap_or(Role::Extra);
            let slot = match role {
                Role::Extra => {
                    map.extras.push(descriptor.clone());
                    continue;
                }
                Role::Name => &mut map.name,
                Role::Owner => &mut map.owner,
                Role::Description => &mut map.description,
                Role::Sequence => &mut map.length,
                Role::Created => &mut map.created,
                Role::Modified => &mut map.modified,
                Role::Accessed => &mut map.accessed,
            };
            if slot.is_some() {
                return Err(PlanError::DuplicateRole(role.code()));
            }
            *slot = Some(descriptor.clone());
        }

        Ok(map)
    }

    /// Descriptor holding a singular role, if any.
    ///
    /// Extra columns are reached through [`ProjectionMap::extras`].
    pub fn slot(&self, role: Role) -> Option<&Descriptor> {
        match role {
            Role::Name => self.name.as_ref(),
            Role::Owner => self.owner.as_ref(),
            Role::Description => self.description.as_ref(),
            Role::Sequence => self.length.as_ref(),
            Role::Created => self.created.as_ref(),
            Role::Modified => self.modified.as_ref(),
            Role::Accessed => self.accessed.as_ref(),
            Role::Extra => None,
        }
    }
}

/// One column of the plan handed to the display layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanColumn {
    /// Header shown above the column.
    pub header: String,
    /// Semantic role of the column.
    pub kind: Role,
    /// Explicit width; `None` renders auto-sized.
    pub width: Option<usize>,
}

impl PlanColumn {
    /// Creates an auto-width plan column.
    pub fn new(header: impl Into<String>, kind: Role) -> PlanColumn {
        PlanColumn {
            header: header.into(),
            kind,
            width: None,
        }
    }
}

/// Ordered column plan for a display grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnPlan {
    /// Columns in display order.
    pub columns: Vec<PlanColumn>,
}

impl ColumnPlan {
    /// Builds the plan from descriptors, in descriptor order.
    pub fn from_descriptors(descriptors: &[Descriptor]) -> ColumnPlan {
        ColumnPlan {
            columns: descriptors
                .iter()
                .map(|descriptor| PlanColumn {
                    header: descriptor.header_text().to_string(),
                    kind: descriptor.kind.unwrap_or(Role::Extra),
                    width: descriptor.width.filter(|w| *w > 0),
                })
                .collect(),
        }
    }

    /// The placeholder plan installed when a batch is empty: a single name
    /// column headed [`EMPTY_HEADER`].
    pub fn empty_placeholder() -> ColumnPlan {
        ColumnPlan {
            columns: vec![PlanColumn::new(EMPTY_HEADER, Role::Name)],
        }
    }

    /// True when this is the empty-batch placeholder plan.
    pub fn is_empty_placeholder(&self) -> bool {
        self.columns.len() == 1 && self.columns[0].header == EMPTY_HEADER
    }
}
