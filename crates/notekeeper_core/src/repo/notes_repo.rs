//! Notes/users repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Translate entity operations into the fixed SQL surface below.
//! - Scan rows into flat `Note`/`User` records.
//!
//! # Invariants
//! - Every call runs on the handle it is given; inside a service call that
//!   handle is the active transaction.
//! - Driver errors are returned as-is (no retry, no semantic wrapping).
//! - `update_note` does not check existence; zero affected rows is success.

use crate::model::note::Note;
use crate::model::user::User;
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, Row};

const INSERT_NOTE_SQL: &str = "insert into notes (id, title, content) values ($1, $2, $3)";
const INSERT_USER_SQL: &str = "insert into users (id, username, email) values ($1, $2, $3)";
const SELECT_NOTES_SQL: &str = "select * from notes;";
const SELECT_USERS_SQL: &str = "select * from users;";
const UPDATE_NOTE_SQL: &str = "update notes set title = $1, content = $2 where id = $3";
const EXISTS_NOTE_SQL: &str = "select exists (select id from notes where id = $1)";

/// Repository interface for notes and users.
///
/// `conn` is the active database handle. A `rusqlite::Transaction` derefs to
/// `Connection`, so callers pass the transaction they are working in.
pub trait NotesRepository {
    /// Inserts one note row and returns the same note.
    fn create_new_note(&self, conn: &Connection, note: Note) -> RepoResult<Note>;
    /// Inserts one user row and returns the same user.
    fn create_new_user(&self, conn: &Connection, user: User) -> RepoResult<User>;
    /// Returns every note in storage order. Empty table gives an empty list.
    fn get_all_notes(&self, conn: &Connection) -> RepoResult<Vec<Note>>;
    /// Returns every user in storage order.
    fn get_all_user(&self, conn: &Connection) -> RepoResult<Vec<User>>;
    /// Overwrites title/content of the row keyed by `note_id`.
    ///
    /// Returns `note` re-keyed to `note_id`, whether or not a row matched.
    fn update_note(&self, conn: &Connection, note_id: &str, note: Note) -> RepoResult<Note>;
    /// Returns whether a row with `note_id` exists.
    fn exists_note_with_id(&self, conn: &Connection, note_id: &str) -> RepoResult<bool>;
}

/// SQLite-backed notes/users repository. Holds no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteNotesRepository;

impl SqliteNotesRepository {
    pub fn new() -> Self {
        Self
    }

    /// Constructs a repository after checking the schema on `conn`.
    pub fn try_new(conn: &Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn)?;
        Ok(Self)
    }
}

impl NotesRepository for SqliteNotesRepository {
    fn create_new_note(&self, conn: &Connection, note: Note) -> RepoResult<Note> {
        let changed = conn.execute(
            INSERT_NOTE_SQL,
            params![note.id.as_str(), note.title.as_str(), note.content.as_str()],
        )?;
        debug!("event=note_insert module=repo status=ok rows_affected={changed}");
        Ok(note)
    }

    fn create_new_user(&self, conn: &Connection, user: User) -> RepoResult<User> {
        let changed = conn.execute(
            INSERT_USER_SQL,
            params![user.id.as_str(), user.username.as_str(), user.email.as_str()],
        )?;
        debug!("event=user_insert module=repo status=ok rows_affected={changed}");
        Ok(user)
    }

    fn get_all_notes(&self, conn: &Connection) -> RepoResult<Vec<Note>> {
        let mut stmt = conn.prepare(SELECT_NOTES_SQL)?;
        let notes = stmt
            .query_map([], note_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    fn get_all_user(&self, conn: &Connection) -> RepoResult<Vec<User>> {
        let mut stmt = conn.prepare(SELECT_USERS_SQL)?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(User {
                id: row.get("id")?,
                username: row.get("username")?,
                email: row.get("email")?,
            });
        }
        Ok(users)
    }

    fn update_note(&self, conn: &Connection, note_id: &str, note: Note) -> RepoResult<Note> {
        let changed = conn.execute(
            UPDATE_NOTE_SQL,
            params![note.title.as_str(), note.content.as_str(), note_id],
        )?;
        debug!("event=note_update module=repo status=ok rows_affected={changed}");
        Ok(Note {
            id: note_id.to_string(),
            ..note
        })
    }

    fn exists_note_with_id(&self, conn: &Connection, note_id: &str) -> RepoResult<bool> {
        let exists: bool = conn.query_row(EXISTS_NOTE_SQL, [note_id], |row| row.get(0))?;
        Ok(exists)
    }
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
    })
}

fn ensure_schema_ready(conn: &Connection) -> RepoResult<()> {
    let required: [(&'static str, [&'static str; 3]); 2] = [
        ("notes", ["id", "title", "content"]),
        ("users", ["id", "username", "email"]),
    ];

    for (table, columns) in required {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
        for column in columns {
            if !table_has_column(conn, table, column)? {
                return Err(RepoError::MissingRequiredColumn { table, column });
            }
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
