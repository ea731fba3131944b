use super::{print_json, tracker};
use crate::{
    libs::{
        formatter::{format_optional_units, format_units},
        messages::Message,
        pomodoro::StartPomodoroRequest,
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct PomodoroArgs {
    #[command(subcommand)]
    command: PomodoroCommand,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum PomodoroCommand {
    /// Start a focus or break interval in a session
    Start {
        session_id: i64,
        /// Duration rule ID
        #[arg(short, long)]
        rule: i64,
        /// Pomodoro type ID
        #[arg(short = 't', long = "type")]
        type_id: i64,
        /// focus or break
        #[arg(short, long, default_value = "focus")]
        event: String,
        /// Planned length in the configured time unit
        #[arg(short, long, allow_negative_numbers = true)]
        planned: i64,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Complete an open pomodoro
    Complete { id: i64 },
    /// Cancel an open pomodoro
    Cancel { id: i64 },
    /// List the pomodoros of a session
    List { session_id: i64 },
    /// Show one pomodoro
    Show { id: i64 },
}

pub fn cmd(args: PomodoroArgs) -> Result<()> {
    let tracker = tracker()?;
    let unit = tracker.unit();
    let json = args.json;

    match args.command {
        PomodoroCommand::Start {
            session_id,
            rule,
            type_id,
            event,
            planned,
            notes,
        } => {
            let pomodoro = tracker.start_pomodoro(StartPomodoroRequest {
                session_id,
                rule_id: rule,
                type_id,
                event_kind: event,
                planned_duration: planned,
                notes,
            })?;
            if json {
                return print_json(&pomodoro);
            }
            msg_success!(Message::PomodoroStarted {
                id: pomodoro.id,
                event_kind: pomodoro.event_kind.to_string(),
                planned: format_units(pomodoro.planned_duration, unit),
            });
        }
        PomodoroCommand::Complete { id } => {
            let pomodoro = tracker.complete_pomodoro(id)?;
            if json {
                return print_json(&pomodoro);
            }
            msg_success!(Message::PomodoroCompleted {
                id,
                credited: format_optional_units(pomodoro.credited_duration, unit),
            });
        }
        PomodoroCommand::Cancel { id } => {
            let pomodoro = tracker.cancel_pomodoro(id)?;
            if json {
                return print_json(&pomodoro);
            }
            msg_success!(Message::PomodoroCancelled {
                id,
                credited: format_optional_units(pomodoro.credited_duration, unit),
            });
        }
        PomodoroCommand::List { session_id } => {
            let pomodoros = tracker.list_pomodoros(session_id)?;
            if json {
                return print_json(&pomodoros);
            }
            if pomodoros.is_empty() {
                msg_info!(Message::NoPomodorosForSession(session_id));
                return Ok(());
            }
            msg_print!(Message::PomodorosTitle(session_id), true);
            View::pomodoros(&pomodoros, unit)?;
        }
        PomodoroCommand::Show { id } => {
            let pomodoro = tracker.get_pomodoro(id)?;
            if json {
                return print_json(&pomodoro);
            }
            View::pomodoros(&[pomodoro], unit)?;
        }
    }

    Ok(())
}
