use super::{print_json, tracker};
use crate::{
    libs::{formatter::format_units, messages::Message, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct PauseArgs {
    #[command(subcommand)]
    command: PauseCommand,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum PauseCommand {
    /// Open a pause inside a pomodoro
    Start { pomodoro_id: i64 },
    /// Close a pause and credit the session's pause total
    Finalize { id: i64 },
    /// List the pauses of a pomodoro
    List { pomodoro_id: i64 },
}

pub fn cmd(args: PauseArgs) -> Result<()> {
    let tracker = tracker()?;
    let unit = tracker.unit();
    let json = args.json;

    match args.command {
        PauseCommand::Start { pomodoro_id } => {
            let pause = tracker.start_pause(pomodoro_id)?;
            if json {
                return print_json(&pause);
            }
            msg_success!(Message::PauseStarted(pause.id, pomodoro_id));
        }
        PauseCommand::Finalize { id } => {
            let pause = tracker.finalize_pause(id)?;
            if json {
                return print_json(&pause);
            }
            msg_success!(Message::PauseFinalized {
                id,
                credited: format_units(pause.credited_duration, unit),
            });
        }
        PauseCommand::List { pomodoro_id } => {
            let pauses = tracker.list_pauses(pomodoro_id)?;
            if json {
                return print_json(&pauses);
            }
            if pauses.is_empty() {
                msg_info!(Message::NoPausesForPomodoro(pomodoro_id));
                return Ok(());
            }
            msg_print!(Message::PausesTitle(pomodoro_id), true);
            View::pauses(&pauses, unit)?;
        }
    }

    Ok(())
}
