//! Column descriptors: named field candidates.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::role::Role;

/// A named field candidate with an optional semantic role and an optional
/// explicit display width.
///
/// Descriptors are created fresh by each discovery pass, mutated only during
/// role assignment and width balancing, and discarded at the end of the
/// batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Field/member name the cell is read from; unique within one list.
    pub name: String,
    /// Semantic role; `None` until assigned.
    pub kind: Option<Role>,
    /// Explicit display width; `None` means unconstrained/auto.
    pub width: Option<usize>,
    /// Header override; the field name is used when absent.
    pub header: Option<String>,
}

impl Descriptor {
    /// Creates an unassigned, auto-width descriptor for a field.
    pub fn new(name: impl Into<String>) -> Descriptor {
        Descriptor {
            name: name.into(),
            kind: None,
            width: None,
            header: None,
        }
    }

    /// Sets an explicit display width. A width of `0` means auto.
    pub fn with_width(mut self, width: usize) -> Descriptor {
        self.width = (width > 0).then_some(width);
        self
    }

    /// Sets the header shown for the column.
    pub fn with_header(mut self, header: impl Into<String>) -> Descriptor {
        self.header = Some(header.into());
        self
    }

    /// Sets the semantic role.
    pub fn with_kind(mut self, role: Role) -> Descriptor {
        self.kind = Some(role);
        self
    }

    /// Header shown for the column: the override or the field name.
    pub fn header_text(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.name)
    }
}

/// One column of a registered format definition.
///
/// Format registries describe a type's preferred layout as a list of
/// (field, header) pairs with optional width and kind hints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormatColumn {
    /// Field the cell is read from.
    pub field: String,
    /// Header shown for the column.
    pub header: String,
    /// Explicit width, if the format prescribes one.
    pub width: Option<usize>,
    /// Kind code (`N`, `S`, `DC`, ...), if the format prescribes one.
    pub kind: Option<String>,
}

impl FormatColumn {
    /// Creates a format column with no width or kind hints.
    pub fn new(field: impl Into<String>, header: impl Into<String>) -> FormatColumn {
        FormatColumn {
            field: field.into(),
            header: header.into(),
            width: None,
            kind: None,
        }
    }

    /// Sets the prescribed width.
    pub fn with_width(mut self, width: usize) -> FormatColumn {
        self.width = (width > 0).then_some(width);
        self
    }

    /// Sets the prescribed kind code.
    pub fn with_kind(mut self, code: impl Into<String>) -> FormatColumn {
        self.kind = Some(code.into());
        self
    }

    /// Converts the registry entry into a descriptor.
    ///
    /// A malformed kind code is a fatal configuration error.
    pub fn into_descriptor(self) -> Result<Descriptor> {
        let kind = self.kind.as_deref().map(Role::parse).transpose()?;
        Ok(Descriptor {
            name: self.field,
            kind,
            width: self.width.filter(|w| *w > 0),
            header: Some(self.header),
        })
    }
}
