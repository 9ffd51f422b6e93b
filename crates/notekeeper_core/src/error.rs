//! Application-level errors exposed by the service layer.
//!
//! Callers see a stable [`ErrorKey`]; the persistence cause stays reachable
//! through [`std::error::Error::source`] for diagnostics. Keys are mapped to
//! user-facing messages outside this crate.

use crate::repo::RepoError;
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Stable symbolic error identifiers used for message translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    FetchingAllNotes,
    UnknownWhileSavingNewNote,
    NoteNotFound,
    UnknownWhileUpdatingNote,
}

impl ErrorKey {
    /// Translation-file key for this error.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FetchingAllNotes => "errorFetchingAllNotes",
            Self::UnknownWhileSavingNewNote => "errorUnknownWhileSavingNewNote",
            Self::NoteNotFound => "errorNoteNotFound",
            Self::UnknownWhileUpdatingNote => "errorUnknownWhileUpdatingNote",
        }
    }
}

impl Display for ErrorKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse category of an application error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppErrorKind {
    Internal,
    NotFound,
}

/// Error returned by every service call.
#[derive(Debug, Error)]
#[error("{key}")]
pub struct AppError {
    key: ErrorKey,
    kind: AppErrorKind,
    #[source]
    source: Option<RepoError>,
}

impl AppError {
    /// Internal failure wrapping the underlying persistence cause.
    pub fn internal_with_underlying(key: ErrorKey, source: RepoError) -> Self {
        Self {
            key,
            kind: AppErrorKind::Internal,
            source: Some(source),
        }
    }

    /// Missing-entity failure; carries no underlying cause.
    pub fn not_found(key: ErrorKey) -> Self {
        Self {
            key,
            kind: AppErrorKind::NotFound,
            source: None,
        }
    }

    pub fn key(&self) -> ErrorKey {
        self.key
    }

    pub fn kind(&self) -> AppErrorKind {
        self.kind
    }

    /// Persistence cause, if any.
    pub fn underlying(&self) -> Option<&RepoError> {
        self.source.as_ref()
    }
}
