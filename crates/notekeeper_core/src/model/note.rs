//! Note entity and its creation payload.

use crate::id::new_short_id;
use serde::{Deserialize, Serialize};

/// Persisted note row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// User-supplied fields for a new note. Carries no ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNoteInput {
    pub title: String,
    pub content: String,
}

impl Note {
    /// Builds a note with a freshly generated short ID.
    pub fn from_input(input: NewNoteInput) -> Self {
        Self::with_id(new_short_id(), input)
    }

    /// Builds a note under a caller-provided ID.
    ///
    /// Used by update paths where identity already exists.
    pub fn with_id(id: impl Into<String>, input: NewNoteInput) -> Self {
        Self {
            id: id.into(),
            title: input.title,
            content: input.content,
        }
    }
}
