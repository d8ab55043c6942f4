//! Board column slice.
//!
//! SYSTEM CONTEXT
//! ==============
//! Columns are owned by the board configuration; the export dialog only
//! reads them. Order in `ColumnsState::items` is the canonical board order.

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;

use serde::{Deserialize, Serialize};

/// A board lane that notes are sorted into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique column identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Accent color token (e.g. `"backlog-blue"`).
    #[serde(default)]
    pub color: String,
    /// Whether the column is shown to participants and included in exports.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Position hint used by the board layout.
    #[serde(default)]
    pub index: i32,
}

fn default_visible() -> bool {
    true
}

impl Column {
    pub fn new(id: impl Into<String>, name: impl Into<String>, visible: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: String::new(),
            visible,
            index: 0,
        }
    }
}

/// Ordered column list for the active board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnsState {
    pub items: Vec<Column>,
}

impl ColumnsState {
    pub fn new(items: Vec<Column>) -> Self {
        Self { items }
    }
}
