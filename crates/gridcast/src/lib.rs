//! Dynamic tabular projection of structured objects for console panels.
//!
//! gridcast turns a heterogeneous, unordered batch of structured objects
//! into a fixed, small set of named, typed display columns for a tabular
//! grid of limited width. Field candidates are discovered from registered
//! format definitions or by introspecting the samples, semantic roles (name,
//! description, owner, timestamps, sequence) are assigned with pattern
//! heuristics, explicit widths are balanced against the panel width, and
//! batches with no stable shape fall back to a generic index/value/type
//! projection.
//!
//! # Example
//!
//! ```rust
//! use gridcast::{BatchData, ObjectSource, Panel, PanelConfig, SourceError, SourceObject};
//! use serde_json::json;
//!
//! struct Fixed(Vec<SourceObject>);
//!
//! impl ObjectSource for Fixed {
//!     fn fetch(&mut self) -> Result<BatchData, SourceError> {
//!         Ok(BatchData::Objects(self.0.clone()))
//!     }
//! }
//!
//! let mut source = Fixed(vec![
//!     SourceObject::new(json!({"Name": "sshd", "Status": "running", "Port": 22})),
//!     SourceObject::new(json!({"Name": "cron", "Status": "stopped", "Port": 0})),
//! ]);
//!
//! let mut panel = Panel::new(PanelConfig::default());
//! panel.update(&mut source, 80).unwrap();
//!
//! let plan = panel.plan().unwrap();
//! assert_eq!(plan.columns[0].header, "Name");
//! assert_eq!(panel.rows().len(), 2);
//! ```
//!
//! The pure projection stages live in [`plan`] (the `gridcast-plan` crate)
//! and can be driven directly without a panel.

pub use gridcast_plan as plan;

mod collab;
mod config;
mod discover;
mod grid;
mod mixed;
mod object;
mod panel;
mod row;

pub use collab::{
    BatchData, ConventionalDisplay, DisplayResolver, FormatRegistry, MemberSource, NoFormats,
    ObjectSource, SourceError, ValueMembers,
};
pub use config::PanelConfig;
pub use grid::render_grid;
pub use object::SourceObject;
pub use panel::{ColumnSpec, Panel};
pub use row::Row;

// the plan vocabulary, re-exported for hosts that only depend on the facade
pub use gridcast_plan::{
    ColumnPlan, Descriptor, FormatColumn, PlanColumn, PlanError, ProjectionMap, Role,
};
