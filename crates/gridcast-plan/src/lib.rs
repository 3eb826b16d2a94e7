//! Projection core for gridcast: descriptors, roles, and column plans.
//!
//! This crate holds the pure stages of the tabular projection pipeline.
//! A discovery pass (in the `gridcast` facade crate) produces a list of
//! [`Descriptor`]s; this crate assigns semantic [`Role`]s to them, balances
//! their explicit widths against the available panel width, limits the
//! column count, and resolves the result into a [`ProjectionMap`] plus a
//! [`ColumnPlan`] for the display layer.
//!
//! The stages are plain functions connected by explicit data, so each is
//! testable on its own:
//!
//! ```rust
//! use gridcast_plan::{
//!     assign_roles, balance_widths, truncate_columns, ColumnPlan, Descriptor,
//!     ProjectionMap, Role,
//! };
//!
//! let mut descriptors = vec![
//!     Descriptor::new("Name"),
//!     Descriptor::new("Status"),
//!     Descriptor::new("Port"),
//! ];
//!
//! assign_roles(&mut descriptors, 8);
//! truncate_columns(&mut descriptors, 8);
//! balance_widths(&mut descriptors, 76);
//!
//! let map = ProjectionMap::build(&descriptors).unwrap();
//! assert_eq!(map.name.as_ref().unwrap().name, "Name");
//! assert_eq!(map.owner.as_ref().unwrap().name, "Status");
//!
//! let plan = ColumnPlan::from_descriptors(&descriptors);
//! assert_eq!(plan.columns.len(), 3);
//! ```
//!
//! Nothing in this crate performs I/O or knows about object sources; those
//! seams live in `gridcast`.

mod assign;
mod balance;
mod descriptor;
mod error;
mod map;
mod pattern;
mod role;

pub use assign::{assign_roles, truncate_columns};
pub use balance::balance_widths;
pub use descriptor::{Descriptor, FormatColumn};
pub use error::{PlanError, Result};
pub use map::{ColumnPlan, PlanColumn, ProjectionMap, EMPTY_HEADER};
pub use pattern::{find_best, Pattern};
pub use role::Role;
