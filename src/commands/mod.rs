//! Command-line interface for pomolog.
//!
//! Each subcommand maps onto one group of [`Tracker`] operations. Records are
//! printed as tables, or as JSON with `--json`. Failures propagate as
//! `anyhow` errors; `main` turns a [`TrackerError`](crate::libs::error::TrackerError)
//! in the chain into a distinct exit status.
//!
//! ```bash
//! pomolog user create carlos --email carlos@example.com
//! pomolog session create 1 "Calculus"
//! pomolog pomodoro start 1 --rule 2 --type 1 --event focus --planned 25
//! pomolog pomodoro complete 1
//! pomolog stats 1 --json
//! ```

pub mod init;
pub mod migrations;
pub mod pause;
pub mod pomodoro;
pub mod rules;
pub mod session;
pub mod stats;
pub mod user;

use crate::libs::config::Config;
use crate::libs::tracker::Tracker;
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage users")]
    User(user::UserArgs),
    #[command(about = "Manage sessions and their totals")]
    Session(session::SessionArgs),
    #[command(about = "Start, complete and cancel pomodoros")]
    Pomodoro(pomodoro::PomodoroArgs),
    #[command(about = "Start and finalize pauses inside a pomodoro")]
    Pause(pause::PauseArgs),
    #[command(about = "List duration rules")]
    Rules(rules::RulesArgs),
    #[command(about = "List pomodoro types")]
    Types(rules::TypesArgs),
    #[command(about = "Show statistics for a user")]
    Stats(stats::StatsArgs),
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::User(args) => user::cmd(args),
            Commands::Session(args) => session::cmd(args),
            Commands::Pomodoro(args) => pomodoro::cmd(args),
            Commands::Pause(args) => pause::cmd(args),
            Commands::Rules(args) => rules::rules_cmd(args),
            Commands::Types(args) => rules::types_cmd(args),
            Commands::Stats(args) => stats::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Opens the tracker on the configured database.
pub(crate) fn tracker() -> Result<Tracker> {
    Tracker::from_config(&Config::read()?)
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
