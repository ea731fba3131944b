use super::{print_json, tracker};
use crate::{
    libs::{error::TrackerError, messages::Message, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    command: UserCommand,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    /// Register a new user
    Create {
        nickname: String,
        #[arg(short, long)]
        email: Option<String>,
    },
    /// List all users
    List,
    /// Show one user
    Show { id: i64 },
    /// Look a user up by nickname or email
    Find {
        #[arg(short, long)]
        nickname: Option<String>,
        #[arg(short, long, conflicts_with = "nickname")]
        email: Option<String>,
    },
    /// Delete a user with all of their sessions
    Delete { id: i64 },
}

pub fn cmd(args: UserArgs) -> Result<()> {
    let tracker = tracker()?;
    let json = args.json;

    match args.command {
        UserCommand::Create { nickname, email } => {
            let user = tracker.create_user(&nickname, email.as_deref())?;
            if json {
                return print_json(&user);
            }
            msg_success!(Message::UserCreated(user.id, user.nickname));
        }
        UserCommand::List => {
            let users = tracker.list_users()?;
            if json {
                return print_json(&users);
            }
            if users.is_empty() {
                msg_info!(Message::NoUsersFound);
                return Ok(());
            }
            msg_print!(Message::UsersTitle, true);
            View::users(&users)?;
        }
        UserCommand::Show { id } => {
            let user = tracker.get_user(id)?;
            if json {
                return print_json(&user);
            }
            View::users(&[user])?;
        }
        UserCommand::Find { nickname, email } => {
            let user = match (nickname, email) {
                (Some(nickname), _) => tracker.find_user_by_nickname(&nickname)?,
                (None, Some(email)) => tracker.find_user_by_email(&email)?,
                (None, None) => return Err(TrackerError::InvalidArgument(Message::UserLookupNeedsKey.to_string()).into()),
            };
            if json {
                return print_json(&user);
            }
            View::users(&[user])?;
        }
        UserCommand::Delete { id } => {
            tracker.delete_user(id)?;
            msg_success!(Message::UserDeleted(id));
        }
    }

    Ok(())
}
