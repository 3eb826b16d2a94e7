//! Descriptor discovery strategies.
//!
//! Two ways of obtaining the initial descriptor list for a batch: a
//! registered format definition matching the reported type name, or member
//! introspection over the samples themselves. Both feed the discovered list
//! through role assignment and the column-count limiter; width balancing
//! happens later, at commit, once the display width is known.

use std::collections::HashSet;

use tracing::debug;

use gridcast_plan::{assign_roles, truncate_columns, Descriptor, Result};

use crate::collab::{FormatRegistry, MemberSource};
use crate::object::SourceObject;

/// Builds descriptors from a registered format definition, if one exists.
///
/// Returns `Ok(None)` when the sample reports no type name or the registry
/// does not know it. A malformed kind code in the registry data is a fatal
/// configuration error.
pub(crate) fn from_registry(
    registry: &dyn FormatRegistry,
    sample: &SourceObject,
    maximum: usize,
) -> Result<Option<Vec<Descriptor>>> {
    let Some(type_name) = sample.type_name() else {
        return Ok(None);
    };
    let Some(columns) = registry.lookup(type_name) else {
        return Ok(None);
    };

    debug!(type_name, columns = columns.len(), "using registered format");

    let mut descriptors = columns
        .into_iter()
        .map(|column| column.into_descriptor())
        .collect::<Result<Vec<_>>>()?;

    assign_roles(&mut descriptors, maximum);
    truncate_columns(&mut descriptors, maximum);
    Ok(Some(descriptors))
}

/// Builds descriptors by introspecting sample members.
///
/// Homogeneous batches use the first sample as the representative;
/// heterogeneous batches take the union of member names across all samples,
/// duplicates collapsed, first-seen order preserved. Returns `None` when no
/// members are found, signaling the mixed-mode fallback.
pub(crate) fn from_members(
    members: &dyn MemberSource,
    objects: &[SourceObject],
    homogeneous: bool,
    maximum: usize,
) -> Option<Vec<Descriptor>> {
    let names = if homogeneous {
        members.members(&objects[0])
    } else {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for object in objects {
            for member in members.members(object) {
                if seen.insert(member.clone()) {
                    names.push(member);
                }
            }
        }
        names
    };

    if names.is_empty() {
        return None;
    }

    debug!(members = names.len(), homogeneous, "introspected members");

    let mut descriptors: Vec<Descriptor> = names.into_iter().map(Descriptor::new).collect();
    assign_roles(&mut descriptors, maximum);
    truncate_columns(&mut descriptors, maximum);
    Some(descriptors)
}
