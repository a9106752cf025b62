//! Terminal host for the task store.
//!
//! Each invocation opens the slot database, hydrates the store, runs one
//! action, and prints its message.

mod api;
mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use todo_core::db::open_db;
use todo_core::{init_logging, SlotError, SqliteSlot, StoreConfig, TaskListStore};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = resolve_config(&cli, StoreConfig::from_env());
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    match run(cli.command, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Overlays command-line flags on `base` (normally the environment config).
fn resolve_config(cli: &Cli, base: StoreConfig) -> StoreConfig {
    let mut config = base;
    if let Some(db) = &cli.db {
        config.db_path = PathBuf::from(db);
    }
    if let Some(key) = &cli.key {
        config.slot_key = key.clone();
    }
    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config
}

/// Returns whether the action succeeded.
fn run(command: Commands, config: &StoreConfig) -> Result<bool, SlotError> {
    if matches!(command, Commands::Version) {
        println!("todo_core version={}", todo_core::core_version());
        return Ok(true);
    }

    let conn = open_db(&config.db_path)?;
    let mut store = TaskListStore::initialize_with_key(SqliteSlot::new(&conn), &config.slot_key);

    let response = match command {
        Commands::Add(args) => api::add_task(&mut store, &args.text.join(" ")),
        Commands::Toggle(args) => api::toggle_task(&mut store, &args.id),
        Commands::Edit(args) => api::edit_task(&mut store, &args.id, &args.text.join(" ")),
        Commands::Delete(args) => api::delete_task(&mut store, &args.id),
        Commands::List(args) => {
            for line in api::list_lines(&store, args.filter.into()) {
                println!("{line}");
            }
            if let Some(summary) = api::summary_line(&store) {
                println!("{summary}");
            }
            return Ok(true);
        }
        Commands::Summary => {
            println!("{}", store.completion_summary());
            return Ok(true);
        }
        Commands::Version => return Ok(true),
    };

    match &response.task_id {
        Some(id) => println!("{} ({id})", response.message),
        None => println!("{}", response.message),
    }
    Ok(response.ok)
}
