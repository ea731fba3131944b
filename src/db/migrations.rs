//! Database schema migration management and versioning.
//!
//! Every migration runs inside one transaction together with the others that
//! are pending, and is recorded in the `migrations` table so it is applied
//! exactly once per database.
//!
//! ## Usage
//!
//! ```rust
//! use pomolog::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 2);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::libs::policy::{DEFAULT_RULES, DEFAULT_TYPES};
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};
use serde::Serialize;

/// Tracks applied migrations.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// One row of the `migrations` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedMigration {
    pub version: u32,
    pub name: String,
    pub applied_at: String,
}

/// Schema version of a database compared to the newest known migration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MigrationStatus {
    pub version: u32,
    pub latest: u32,
    pub needs_update: bool,
}

/// Registry of all migrations, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: core tables. Ownership is expressed with cascading
        // foreign keys: user -> sessions -> pomodoros -> pauses.
        self.add_migration(1, "create_core_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS users (
                    id INTEGER PRIMARY KEY,
                    nickname TEXT NOT NULL UNIQUE,
                    email TEXT UNIQUE,
                    created_at TEXT NOT NULL
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS sessions (
                    id INTEGER PRIMARY KEY,
                    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE ON UPDATE CASCADE,
                    name TEXT NOT NULL,
                    description TEXT,
                    created_at TEXT NOT NULL,
                    total_focus INTEGER NOT NULL DEFAULT 0 CHECK (total_focus >= 0),
                    total_break INTEGER NOT NULL DEFAULT 0 CHECK (total_break >= 0),
                    total_pause INTEGER NOT NULL DEFAULT 0 CHECK (total_pause >= 0)
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS rules (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE,
                    focus_duration INTEGER NOT NULL CHECK (focus_duration > 0),
                    break_duration INTEGER NOT NULL CHECK (break_duration > 0),
                    description TEXT
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS pomodoro_types (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS pomodoros (
                    id INTEGER PRIMARY KEY,
                    session_id INTEGER NOT NULL REFERENCES sessions(id) ON DELETE CASCADE ON UPDATE CASCADE,
                    rule_id INTEGER NOT NULL REFERENCES rules(id),
                    type_id INTEGER NOT NULL REFERENCES pomodoro_types(id),
                    event_kind TEXT NOT NULL CHECK (event_kind IN ('focus', 'break')),
                    planned_duration INTEGER NOT NULL CHECK (planned_duration > 0),
                    started_at TEXT NOT NULL,
                    ended_at TEXT,
                    state TEXT NOT NULL DEFAULT 'open' CHECK (state IN ('open', 'completed', 'cancelled')),
                    credited_duration INTEGER,
                    notes TEXT
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS pauses (
                    id INTEGER PRIMARY KEY,
                    pomodoro_id INTEGER NOT NULL REFERENCES pomodoros(id) ON DELETE CASCADE ON UPDATE CASCADE,
                    started_at TEXT NOT NULL,
                    ended_at TEXT,
                    credited_duration INTEGER NOT NULL DEFAULT 0
                )",
                [],
            )?;

            // Foreign key lookups
            tx.execute("CREATE INDEX IF NOT EXISTS idx_sessions_user_id ON sessions(user_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_pomodoros_session_id ON pomodoros(session_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_pomodoros_state ON pomodoros(state)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_pauses_pomodoro_id ON pauses(pomodoro_id)", [])?;

            Ok(())
        });

        // Version 2: reference data shipped with every database
        self.add_migration(2, "seed_rules_and_types", |tx| {
            for (name, focus, brk, description) in DEFAULT_RULES {
                tx.execute(
                    "INSERT OR IGNORE INTO rules (name, focus_duration, break_duration, description) VALUES (?1, ?2, ?3, ?4)",
                    params![name, focus, brk, description],
                )?;
            }
            for name in DEFAULT_TYPES {
                tx.execute("INSERT OR IGNORE INTO pomodoro_types (name) VALUES (?1)", params![name])?;
            }
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies all pending migrations in one transaction.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest applied version; 0 for a database that was never migrated.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        if !has_migrations_table(conn)? {
            return Ok(0);
        }
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;

        Ok(version.unwrap_or(0))
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        if !has_migrations_table(conn)? {
            return Ok(false);
        }
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// Every applied migration in version order. Empty when the database
    /// has never been migrated.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<AppliedMigration>> {
        if !has_migrations_table(conn)? {
            return Ok(Vec::new());
        }
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| {
                Ok(AppliedMigration {
                    version: row.get(0)?,
                    name: row.get(1)?,
                    applied_at: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

fn has_migrations_table(conn: &Connection) -> Result<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations')",
        [],
        |row| row.get(0),
    )?;
    Ok(exists)
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    Ok(migration_status(conn)?.needs_update)
}

pub fn migration_status(conn: &Connection) -> Result<MigrationStatus> {
    let manager = MigrationManager::new();
    let version = manager.get_current_version(conn)?;
    let latest = manager.latest_version();
    Ok(MigrationStatus {
        version,
        latest,
        needs_update: version < latest,
    })
}
