use super::{print_json, tracker};
use crate::{
    libs::{error::TrackerError, formatter::format_units, messages::Message, session::TotalKind, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

#[derive(Debug, Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    command: SessionCommand,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum SessionCommand {
    /// Create a session for a user
    Create {
        user_id: i64,
        name: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Show one session with its totals
    Show { id: i64 },
    /// List the sessions of a user
    List { user_id: i64 },
    /// Add time to one of a session's totals
    Credit {
        id: i64,
        /// focus, break or pause
        kind: TotalKind,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

pub fn cmd(args: SessionArgs) -> Result<()> {
    let tracker = tracker()?;
    let unit = tracker.unit();
    let json = args.json;

    match args.command {
        SessionCommand::Create {
            user_id,
            name,
            description,
        } => {
            let session = tracker.create_session(user_id, &name, description.as_deref())?;
            if json {
                return print_json(&session);
            }
            msg_success!(Message::SessionCreated(session.id, session.name));
        }
        SessionCommand::Show { id } => {
            let session = tracker.get_session(id)?;
            if json {
                return print_json(&session);
            }
            View::sessions(&[session], unit)?;
        }
        SessionCommand::List { user_id } => {
            let sessions = tracker.list_sessions(user_id)?;
            if json {
                return print_json(&sessions);
            }
            if sessions.is_empty() {
                msg_info!(Message::NoSessionsForUser(user_id));
                return Ok(());
            }
            msg_print!(Message::SessionsTitle(user_id), true);
            View::sessions(&sessions, unit)?;
        }
        SessionCommand::Credit { id, kind, amount } => {
            if amount < 0 {
                return Err(TrackerError::InvalidArgument(Message::NegativeCredit(amount).to_string()).into());
            }
            let total = tracker.credit(id, kind, amount)?;
            if json {
                return print_json(&json!({ "session_id": id, "kind": kind, "total": total }));
            }
            msg_success!(Message::SessionCredited {
                session_id: id,
                kind: kind.to_string(),
                amount,
                total: format_units(total, unit),
            });
        }
    }

    Ok(())
}
