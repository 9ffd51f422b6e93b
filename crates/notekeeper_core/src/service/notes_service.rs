//! Notes/users use-case service.
//!
//! # Responsibility
//! - Build entities (with fresh IDs) from request payloads.
//! - Run repository calls inside one transaction per call.
//! - Collapse every persistence failure into a keyed [`AppError`].
//!
//! # Invariants
//! - Writes commit only when every repository call in the scope succeeded.
//! - A failed read never returns a partial list.
//! - Reads run in read scopes and do not block on concurrent writers.
//! - No retries at this layer.
//! - User paths report note-specific error keys; translation files only
//!   carry those two keys.

use crate::db::{DbError, TransactionManager};
use crate::error::{AppError, AppResult, ErrorKey};
use crate::model::note::{NewNoteInput, Note};
use crate::model::user::{NewUserInput, User};
use crate::repo::notes_repo::NotesRepository;
use crate::repo::RepoError;
use log::{debug, error};

/// Service facade consumed by API layers.
pub trait NotesService {
    fn save_new_note(&self, input: NewNoteInput) -> AppResult<Note>;
    fn get_all_notes(&self) -> AppResult<Vec<Note>>;
    fn save_new_user(&self, input: NewUserInput) -> AppResult<User>;
    fn get_all_user(&self) -> AppResult<Vec<User>>;
    /// Replaces title/content of an existing note.
    ///
    /// Reports [`ErrorKey::NoteNotFound`] when no note has `note_id`.
    fn update_note(&self, note_id: &str, input: NewNoteInput) -> AppResult<Note>;
}

/// Service backed by a repository and a transaction manager.
#[derive(Debug, Clone)]
pub struct DatabaseBackedNotesService<R, T> {
    repo: R,
    tx_manager: T,
}

impl<R: NotesRepository, T: TransactionManager> DatabaseBackedNotesService<R, T> {
    pub fn new(repo: R, tx_manager: T) -> Self {
        Self { repo, tx_manager }
    }
}

enum UpdateFailure {
    Missing,
    Repo(RepoError),
}

impl From<RepoError> for UpdateFailure {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<DbError> for UpdateFailure {
    fn from(value: DbError) -> Self {
        Self::Repo(value.into())
    }
}

impl<R: NotesRepository, T: TransactionManager> NotesService for DatabaseBackedNotesService<R, T> {
    fn save_new_note(&self, input: NewNoteInput) -> AppResult<Note> {
        let note = Note::from_input(input);
        let saved = self
            .tx_manager
            .within_transaction(|tx| self.repo.create_new_note(tx, note))
            .map_err(|err| {
                error!("event=note_save module=service status=error error={err}");
                AppError::internal_with_underlying(ErrorKey::UnknownWhileSavingNewNote, err)
            })?;
        debug!("event=note_save module=service status=ok id={}", saved.id);
        Ok(saved)
    }

    fn get_all_notes(&self) -> AppResult<Vec<Note>> {
        self.tx_manager
            .within_read_transaction(|tx| self.repo.get_all_notes(tx))
            .map_err(|err| {
                error!("event=notes_fetch module=service status=error error={err}");
                AppError::internal_with_underlying(ErrorKey::FetchingAllNotes, err)
            })
    }

    fn save_new_user(&self, input: NewUserInput) -> AppResult<User> {
        let user = User::from_input(input);
        let saved = self
            .tx_manager
            .within_transaction(|tx| self.repo.create_new_user(tx, user))
            .map_err(|err| {
                error!("event=user_save module=service status=error error={err}");
                AppError::internal_with_underlying(ErrorKey::UnknownWhileSavingNewNote, err)
            })?;
        debug!("event=user_save module=service status=ok id={}", saved.id);
        Ok(saved)
    }

    fn get_all_user(&self) -> AppResult<Vec<User>> {
        self.tx_manager
            .within_read_transaction(|tx| self.repo.get_all_user(tx))
            .map_err(|err| {
                error!("event=users_fetch module=service status=error error={err}");
                AppError::internal_with_underlying(ErrorKey::FetchingAllNotes, err)
            })
    }

    fn update_note(&self, note_id: &str, input: NewNoteInput) -> AppResult<Note> {
        let note = Note::with_id(note_id, input);
        let result: Result<Note, UpdateFailure> = self.tx_manager.within_transaction(|tx| {
            if !self.repo.exists_note_with_id(tx, note_id)? {
                return Err(UpdateFailure::Missing);
            }
            Ok(self.repo.update_note(tx, note_id, note)?)
        });

        match result {
            Ok(updated) => {
                debug!("event=note_update module=service status=ok id={note_id}");
                Ok(updated)
            }
            Err(UpdateFailure::Missing) => {
                debug!("event=note_update module=service status=not_found id={note_id}");
                Err(AppError::not_found(ErrorKey::NoteNotFound))
            }
            Err(UpdateFailure::Repo(err)) => {
                error!("event=note_update module=service status=error error={err}");
                Err(AppError::internal_with_underlying(
                    ErrorKey::UnknownWhileUpdatingNote,
                    err,
                ))
            }
        }
    }
}
