//! Batch orchestration: the panel update state machine.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use gridcast_plan::{
    balance_widths, ColumnPlan, Descriptor, ProjectionMap, Result, Role,
};

use crate::collab::{
    BatchData, ConventionalDisplay, DisplayResolver, FormatRegistry, MemberSource, NoFormats,
    ObjectSource, ValueMembers,
};
use crate::config::PanelConfig;
use crate::discover;
use crate::mixed;
use crate::object::SourceObject;
use crate::row::Row;

/// One column of a pinned custom layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Field the cell is read from.
    pub field: String,
    /// Header override; the field name is used when absent.
    pub header: Option<String>,
    /// Explicit width, if any.
    pub width: Option<usize>,
    /// Kind code (`N`, `S`, `DC`, ...); positional defaults apply when
    /// absent.
    pub kind: Option<String>,
}

impl ColumnSpec {
    /// Creates a spec with no header, width, or kind hints.
    pub fn new(field: impl Into<String>) -> ColumnSpec {
        ColumnSpec {
            field: field.into(),
            header: None,
            width: None,
            kind: None,
        }
    }

    /// Sets the header.
    pub fn with_header(mut self, header: impl Into<String>) -> ColumnSpec {
        self.header = Some(header.into());
        self
    }

    /// Sets an explicit width. A width of `0` means auto.
    pub fn with_width(mut self, width: usize) -> ColumnSpec {
        self.width = (width > 0).then_some(width);
        self
    }

    /// Sets the kind code.
    pub fn with_kind(mut self, code: impl Into<String>) -> ColumnSpec {
        self.kind = Some(code.into());
        self
    }
}

/// Shape of a non-empty batch, decided before discovery.
enum Shape {
    /// Every sample reports the same concrete type name.
    Named,
    /// Structured objects without a shared concrete type; the generic
    /// dynamic-object case, where registry lookup is pointless.
    Generic,
    /// No stable shape: linear or iterable samples, or no common type.
    Mixed,
}

/// A formatted table panel over a stream of object batches.
///
/// The panel is single-threaded and synchronous: one [`Panel::update`] call
/// processes a batch start-to-finish with no suspension points. Each panel
/// owns its rows, projection map, and column plan exclusively; independent
/// panels never share engine state.
pub struct Panel {
    config: PanelConfig,
    registry: Box<dyn FormatRegistry>,
    members: Box<dyn MemberSource>,
    resolver: Box<dyn DisplayResolver>,
    pinned: Option<Arc<ProjectionMap>>,
    map: Option<Arc<ProjectionMap>>,
    plan: Option<ColumnPlan>,
    plan_generation: u64,
    rows: Vec<Row>,
    notices: Vec<String>,
}

impl Panel {
    /// Creates a panel with the default collaborators: no registered
    /// formats, object-key members, conventional display probing.
    pub fn new(config: PanelConfig) -> Panel {
        Panel {
            config,
            registry: Box::new(NoFormats),
            members: Box::new(ValueMembers),
            resolver: Box::new(ConventionalDisplay),
            pinned: None,
            map: None,
            plan: None,
            plan_generation: 0,
            rows: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Replaces the format registry.
    pub fn with_registry(mut self, registry: impl FormatRegistry + 'static) -> Panel {
        self.registry = Box::new(registry);
        self
    }

    /// Replaces the member source.
    pub fn with_members(mut self, members: impl MemberSource + 'static) -> Panel {
        self.members = Box::new(members);
        self
    }

    /// Replaces the display-property resolver.
    pub fn with_resolver(mut self, resolver: impl DisplayResolver + 'static) -> Panel {
        self.resolver = Box::new(resolver);
        self
    }

    /// The current rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The current column plan, if one has been installed.
    pub fn plan(&self) -> Option<&ColumnPlan> {
        self.plan.as_ref()
    }

    /// Counter bumped every time a plan is installed; lets hosts detect
    /// layout changes without comparing plans.
    pub fn plan_generation(&self) -> u64 {
        self.plan_generation
    }

    /// The projection map of the last map-backed batch, if any.
    pub fn projection_map(&self) -> Option<&ProjectionMap> {
        self.map.as_deref()
    }

    /// Drains the notices accumulated by recoverable failures.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// Pins an explicit column layout; discovery is skipped while pinned.
    ///
    /// Specs without a kind code receive positional defaults: the first
    /// unkinded column becomes the name column, the second the description,
    /// the third the owner, and the rest generic extras. Duplicate singular
    /// kinds are rejected.
    pub fn pin_columns(&mut self, columns: Vec<ColumnSpec>) -> Result<()> {
        let descriptors = pinned_descriptors(columns)?;
        let map = Arc::new(ProjectionMap::build(&descriptors)?);
        let plan = ColumnPlan::from_descriptors(&descriptors);
        self.pinned = Some(map.clone());
        self.map = Some(map);
        self.install_plan(plan);
        Ok(())
    }

    /// Clears a pinned layout; the next batch rediscovers its columns.
    pub fn unpin_columns(&mut self) {
        self.pinned = None;
    }

    /// Runs one batch: fetch, analyze, project, install rows and plan.
    ///
    /// `display_width` is the panel width in characters; the per-column
    /// border overhead is subtracted here before width balancing. Returns a
    /// configuration error when a duplicate singular role or malformed kind
    /// code is encountered; fetch failures are recoverable and only surface
    /// as notices.
    pub fn update(&mut self, source: &mut dyn ObjectSource, display_width: usize) -> Result<()> {
        let data = match source.fetch() {
            Ok(data) => data,
            Err(error) => {
                warn!(%error, "batch fetch failed");
                if !self.config.silent {
                    self.notices.push(error.to_string());
                }
                BatchData::Objects(Vec::new())
            }
        };

        // pre-built rows are installed unchanged
        let objects = match data {
            BatchData::Rows(rows) => {
                debug!(rows = rows.len(), "batch arrived as ready rows");
                self.rows = rows;
                return Ok(());
            }
            BatchData::Objects(objects) => objects,
        };

        if objects.is_empty() {
            self.rows.clear();
            // a pinned layout survives empty batches untouched
            if self.pinned.is_some() {
                return Ok(());
            }
            if self
                .plan
                .as_ref()
                .is_some_and(ColumnPlan::is_empty_placeholder)
            {
                return Ok(());
            }
            self.install_plan(ColumnPlan::empty_placeholder());
            return Ok(());
        }

        if let Some(map) = self.pinned.clone() {
            debug!("projecting through the pinned layout");
            self.rows = objects
                .into_iter()
                .map(|object| Row::mapped(object, map.clone()))
                .collect();
            return Ok(());
        }

        let maximum = self.config.max_panel_column_count;
        let descriptors = match analyze(&objects) {
            Shape::Mixed => None,
            Shape::Named => {
                match discover::from_registry(self.registry.as_ref(), &objects[0], maximum)? {
                    Some(descriptors) => Some(descriptors),
                    None => discover::from_members(self.members.as_ref(), &objects, true, maximum),
                }
            }
            Shape::Generic => {
                discover::from_members(self.members.as_ref(), &objects, false, maximum)
            }
        };

        match descriptors {
            None => {
                debug!(objects = objects.len(), "no stable shape, using mixed mode");
                let projection = mixed::project_mixed(
                    &objects,
                    self.resolver.as_ref(),
                    self.config.format_enumeration_limit,
                );
                self.map = None;
                self.rows = projection.rows;
                self.install_plan(projection.plan);
            }
            Some(mut descriptors) => {
                let dw = data_width(display_width, descriptors.len());
                balance_widths(
                    &mut descriptors,
                    dw,
                );
                let map = Arc::new(ProjectionMap::build(&descriptors)?);
                self.map = Some(map.clone());
                self.rows = objects
                    .into_iter()
                    .map(|object| Row::mapped(object, map.clone()))
                    .collect();
                self.install_plan(ColumnPlan::from_descriptors(&descriptors));
            }
        }

        Ok(())
    }

    fn install_plan(&mut self, plan: ColumnPlan) {
        self.plan_generation += 1;
        debug!(
            generation = self.plan_generation,
            columns = plan.columns.len(),
            "installing column plan"
        );
        self.plan = Some(plan);
    }
}

/// N columns need N + 1 borders.
fn data_width(display_width: usize, columns: usize) -> usize {
    display_width.saturating_sub(columns + 1)
}

fn analyze(objects: &[SourceObject]) -> Shape {
    let sample = &objects[0];
    if sample.is_linear() || sample.is_iterable() {
        return Shape::Mixed;
    }

    let first = sample.type_name();
    if first.is_some() && objects.iter().all(|object| object.type_name() == first) {
        return Shape::Named;
    }
    if objects.iter().all(SourceObject::is_structured) {
        return Shape::Generic;
    }
    Shape::Mixed
}

fn pinned_descriptors(columns: Vec<ColumnSpec>) -> Result<Vec<Descriptor>> {
    let mut explicit = Vec::new();
    for spec in &columns {
        if let Some(code) = spec.kind.as_deref() {
            explicit.push(Role::parse(code)?);
        }
    }

    let mut defaults = [Role::Name, Role::Description, Role::Owner]
        .into_iter()
        .filter(|role| !explicit.contains(role));

    columns
        .into_iter()
        .map(|spec| {
            let kind = match spec.kind.as_deref() {
                Some(code) => Role::parse(code)?,
                None => defaults.next().unwrap_or(Role::Extra),
            };
            Ok(Descriptor {
                name: spec.field,
                kind: Some(kind),
                width: spec.width.filter(|w| *w > 0),
                header: spec.header,
            })
        })
        .collect()
}
