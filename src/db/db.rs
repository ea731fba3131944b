use crate::db::migrations::init_with_migrations;
use crate::libs::config::Config;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// An open, migrated SQLite connection.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database named by the current configuration.
    pub fn new() -> Result<Db> {
        let config = Config::read()?;
        Self::open_with_timeout(config.database_path()?, Duration::from_millis(config.busy_timeout_ms))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        Self::open_with_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    pub fn open_with_timeout(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        configure(&conn, busy_timeout)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// A private in-memory database, migrated and seeded.
    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        configure(&conn, DEFAULT_BUSY_TIMEOUT)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the configured database without touching its schema.
    pub fn new_without_migrations() -> Result<Connection> {
        let config = Config::read()?;
        let conn = Connection::open(config.database_path()?)?;
        configure(&conn, Duration::from_millis(config.busy_timeout_ms))?;
        Ok(conn)
    }
}

fn configure(conn: &Connection, busy_timeout: Duration) -> Result<()> {
    conn.busy_timeout(busy_timeout)?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    Ok(())
}
