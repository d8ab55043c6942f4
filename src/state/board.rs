//! Board settings slice for the active board.
//!
//! SYSTEM CONTEXT
//! ==============
//! `data` mirrors the board payload delivered when a participant joins. It
//! stays `None` until the board is loaded, so every reader must treat the
//! absent case explicitly.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use serde::{Deserialize, Serialize};

/// Board-level settings as delivered by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardData {
    /// Board identifier (UUID string).
    pub id: String,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether participants see notes written by others.
    #[serde(default)]
    pub show_notes_of_other_users: Option<bool>,
    #[serde(default)]
    pub allow_stacking: bool,
    #[serde(default)]
    pub moderation: bool,
}

/// Board state: `None` until the board payload arrives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    pub data: Option<BoardData>,
}

impl BoardState {
    pub fn loaded(data: BoardData) -> Self {
        Self { data: Some(data) }
    }

    /// Absent-safe read of the notes visibility flag.
    pub fn show_notes_of_other_users(&self) -> Option<bool> {
        self.data.as_ref().and_then(|d| d.show_notes_of_other_users)
    }
}
