//! Derived view for the export dialog's hidden-content hint.
//!
//! DESIGN
//! ======
//! Selectors here are pure functions over the `columns` and `board` slices.
//! The component calls them inside reactive closures, so the result is
//! recomputed on every read and never stored alongside the source state.

#[cfg(test)]
#[path = "export_hint_test.rs"]
mod export_hint_test;

use crate::state::board::BoardState;
use crate::state::columns::Column;

/// A hidden column as listed in the hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenColumn {
    pub id: String,
    pub name: String,
}

/// What the hint panel should render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HintView {
    /// Nothing is excluded from the export.
    #[default]
    None,
    /// Some content is excluded.
    Hint {
        /// Hidden columns in board order.
        columns: Vec<HiddenColumn>,
        /// Notes of other participants are not shown.
        show_notes_message: bool,
    },
}

impl HintView {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Hint { .. })
    }

    pub fn show_columns_message(&self) -> bool {
        match self {
            Self::Hint { columns, .. } => !columns.is_empty(),
            Self::None => false,
        }
    }

    pub fn show_notes_message(&self) -> bool {
        match self {
            Self::Hint { show_notes_message, .. } => *show_notes_message,
            Self::None => false,
        }
    }

    /// Hidden columns to list; empty for `None`.
    pub fn columns(&self) -> &[HiddenColumn] {
        match self {
            Self::Hint { columns, .. } => columns,
            Self::None => &[],
        }
    }
}

/// Columns with `visible == false`, in their original order.
pub fn hidden_columns(columns: &[Column]) -> Vec<&Column> {
    columns.iter().filter(|col| !col.visible).collect()
}

/// True unless the board explicitly shows other participants' notes.
///
/// An unloaded board or a missing flag counts as hidden.
pub fn notes_hidden(board: &BoardState) -> bool {
    board.show_notes_of_other_users() != Some(true)
}

/// Derive the hint from the current columns and board settings.
pub fn select_hint(columns: &[Column], board: &BoardState) -> HintView {
    let hidden = hidden_columns(columns);
    let notes_hidden = notes_hidden(board);

    if hidden.is_empty() && !notes_hidden {
        return HintView::None;
    }

    HintView::Hint {
        columns: hidden
            .into_iter()
            .map(|col| HiddenColumn { id: col.id.clone(), name: col.name.clone() })
            .collect(),
        show_notes_message: notes_hidden,
    }
}
