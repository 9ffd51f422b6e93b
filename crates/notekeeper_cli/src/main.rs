//! Command-line front end over the notekeeper service.
//!
//! Prints one tab-separated line per entity. Failures exit non-zero with the
//! application error key followed by its cause chain.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use notekeeper_core::{
    core_version, init_logging, DatabaseBackedNotesService, NewNoteInput, NewUserInput,
    NotekeeperConfig, NotesService, SqliteNotesRepository,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "notekeeper", version, about = "Store and list notes and users")]
struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database file; overrides config and environment.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Note operations.
    #[command(subcommand)]
    Note(NoteCommand),
    /// User operations.
    #[command(subcommand)]
    User(UserCommand),
}

#[derive(Debug, Subcommand)]
enum NoteCommand {
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    List,
    Update {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
    },
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => NotekeeperConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => NotekeeperConfig::default(),
    }
    .with_env_overrides();
    if let Some(db) = cli.db {
        config.database_path = Some(db);
    }

    if let Some(log_dir) = &config.log_dir {
        init_logging(config.effective_log_level(), log_dir)
            .map_err(|err| anyhow::anyhow!("initializing logging: {err}"))?;
    }

    let database = config.open_database().context("opening database")?;
    let service = DatabaseBackedNotesService::new(SqliteNotesRepository::new(), database);
    info!(
        "event=cli_command module=cli status=start core_version={} command={:?}",
        core_version(),
        cli.command
    );

    match cli.command {
        Command::Note(NoteCommand::Add { title, content }) => {
            let note = service.save_new_note(NewNoteInput { title, content })?;
            println!("{}\t{}\t{}", note.id, note.title, note.content);
        }
        Command::Note(NoteCommand::List) => {
            for note in service.get_all_notes()? {
                println!("{}\t{}\t{}", note.id, note.title, note.content);
            }
        }
        Command::Note(NoteCommand::Update { id, title, content }) => {
            let note = service.update_note(&id, NewNoteInput { title, content })?;
            println!("{}\t{}\t{}", note.id, note.title, note.content);
        }
        Command::User(UserCommand::Add { username, email }) => {
            let user = service.save_new_user(NewUserInput { username, email })?;
            println!("{}\t{}\t{}", user.id, user.username, user.email);
        }
        Command::User(UserCommand::List) => {
            for user in service.get_all_user()? {
                println!("{}\t{}\t{}", user.id, user.username, user.email);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, NoteCommand};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_note_update_with_global_db_flag() {
        let cli = Cli::try_parse_from([
            "notekeeper",
            "note",
            "update",
            "abc",
            "--title",
            "t",
            "--content",
            "c",
            "--db",
            "/tmp/x.db",
        ])
        .unwrap();
        assert_eq!(cli.db.as_deref(), Some(std::path::Path::new("/tmp/x.db")));
        match cli.command {
            Command::Note(NoteCommand::Update { id, title, content }) => {
                assert_eq!((id.as_str(), title.as_str(), content.as_str()), ("abc", "t", "c"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
