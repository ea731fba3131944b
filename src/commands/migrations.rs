use super::print_json;
use crate::{
    db::{
        db::Db,
        migrations::{migration_status, MigrationManager},
    },
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,

    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show the schema version of the configured database
    Status,
    /// Show applied migrations
    History,
}

/// Inspects the configured database without migrating it, so a file that
/// was never opened by pomolog reports version 0 and an empty history.
pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let conn = Db::new_without_migrations()?;

    match args.command {
        MigrationsCommand::Status => {
            let status = migration_status(&conn)?;
            if args.json {
                return print_json(&status);
            }

            msg_print!(Message::DatabaseVersion(status.version));
            if status.needs_update {
                msg_info!(Message::DatabaseNeedsUpdate);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History => {
            let history = MigrationManager::new().get_migration_history(&conn)?;
            if args.json {
                return print_json(&history);
            }

            if history.is_empty() {
                msg_info!(Message::NoMigrationsApplied);
                return Ok(());
            }
            msg_print!(Message::MigrationHistory, true);
            View::migrations(&history)?;
        }
    }

    Ok(())
}
