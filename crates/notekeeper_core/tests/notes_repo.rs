use notekeeper_core::db::open_db_in_memory;
use notekeeper_core::{
    Database, NewNoteInput, Note, NotesRepository, RepoError, SqliteNotesRepository,
    TransactionManager, User,
};
use rusqlite::Connection;

fn note(id: &str, title: &str, content: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    }
}

#[test]
fn get_all_notes_on_empty_table_returns_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNotesRepository::try_new(&conn).unwrap();

    assert!(repo.get_all_notes(&conn).unwrap().is_empty());
    assert!(repo.get_all_user(&conn).unwrap().is_empty());
}

#[test]
fn create_new_note_returns_same_note_and_persists_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNotesRepository::try_new(&conn).unwrap();

    let created = repo
        .create_new_note(&conn, note("n1", "groceries", "milk"))
        .unwrap();
    assert_eq!(created, note("n1", "groceries", "milk"));

    let all = repo.get_all_notes(&conn).unwrap();
    assert_eq!(all, vec![note("n1", "groceries", "milk")]);
}

#[test]
fn create_new_user_persists_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNotesRepository::new();
    let user = User {
        id: "u1".to_string(),
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
    };

    let created = repo.create_new_user(&conn, user.clone()).unwrap();
    assert_eq!(created, user);
    assert_eq!(repo.get_all_user(&conn).unwrap(), vec![user]);
}

#[test]
fn duplicate_note_id_is_a_constraint_violation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNotesRepository::new();
    repo.create_new_note(&conn, note("dup", "a", "b")).unwrap();

    let err = repo
        .create_new_note(&conn, note("dup", "c", "d"))
        .unwrap_err();
    assert!(err.is_constraint_violation(), "unexpected error: {err}");
    assert_eq!(repo.get_all_notes(&conn).unwrap().len(), 1);
}

#[test]
fn exists_note_with_id_reflects_inserted_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNotesRepository::new();

    assert!(!repo.exists_note_with_id(&conn, "n1").unwrap());
    repo.create_new_note(&conn, note("n1", "t", "c")).unwrap();
    assert!(repo.exists_note_with_id(&conn, "n1").unwrap());
    assert!(!repo.exists_note_with_id(&conn, "n2").unwrap());
}

#[test]
fn update_note_rewrites_title_and_content_for_given_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNotesRepository::new();
    repo.create_new_note(&conn, note("n1", "old", "old body"))
        .unwrap();
    repo.create_new_note(&conn, note("n2", "keep", "keep body"))
        .unwrap();

    let updated = repo
        .update_note(&conn, "n1", note("ignored", "new", "new body"))
        .unwrap();
    assert_eq!(updated, note("n1", "new", "new body"));

    let mut all = repo.get_all_notes(&conn).unwrap();
    all.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(
        all,
        vec![note("n1", "new", "new body"), note("n2", "keep", "keep body")]
    );
}

#[test]
fn update_note_on_missing_id_succeeds_and_leaves_table_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNotesRepository::new();
    repo.create_new_note(&conn, note("n1", "t", "c")).unwrap();

    let input = NewNoteInput {
        title: "x".to_string(),
        content: "y".to_string(),
    };
    let returned = repo
        .update_note(&conn, "missing", Note::with_id("missing", input))
        .unwrap();
    assert_eq!(returned.id, "missing");

    assert_eq!(repo.get_all_notes(&conn).unwrap(), vec![note("n1", "t", "c")]);
    assert!(!repo.exists_note_with_id(&conn, "missing").unwrap());
}

#[test]
fn failing_insert_rolls_back_the_whole_transaction() {
    let db = Database::open_in_memory().unwrap();
    let repo = SqliteNotesRepository::new();

    let result: Result<(), RepoError> = db.within_transaction(|tx| {
        repo.create_new_note(tx, note("n1", "first", "kept?"))?;
        repo.create_new_note(tx, note("n1", "second", "dup"))?;
        Ok(())
    });
    assert!(result.unwrap_err().is_constraint_violation());

    let remaining = db
        .within_transaction(|tx| repo.get_all_notes(tx))
        .unwrap();
    assert!(remaining.is_empty());
}

#[test]
fn nested_calls_in_one_transaction_see_each_other() {
    let db = Database::open_in_memory().unwrap();
    let repo = SqliteNotesRepository::new();

    let seen = db
        .within_transaction(|tx| {
            repo.create_new_note(tx, note("n1", "t", "c"))?;
            repo.exists_note_with_id(tx, "n1")
        })
        .unwrap();
    assert!(seen);
}

#[test]
fn try_new_rejects_connection_without_schema() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteNotesRepository::try_new(&conn).unwrap_err();
    assert!(matches!(err, RepoError::MissingRequiredTable("notes")));
}

#[test]
fn try_new_rejects_table_missing_a_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE notes (id TEXT PRIMARY KEY, title TEXT, content TEXT);
         CREATE TABLE users (id TEXT PRIMARY KEY, username TEXT);",
    )
    .unwrap();

    let err = SqliteNotesRepository::try_new(&conn).unwrap_err();
    assert!(matches!(
        err,
        RepoError::MissingRequiredColumn {
            table: "users",
            column: "email"
        }
    ));
}
