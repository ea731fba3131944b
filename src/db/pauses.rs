//! Pauses table.
//!
//! A pause is open while `ended_at IS NULL`. Finalization is a guarded
//! update that only matches open pauses.

use crate::db::timestamps;
use crate::libs::pause::Pause;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_PAUSE: &str = "INSERT INTO pauses (pomodoro_id, started_at) VALUES (?1, ?2)";
const SELECT_COLUMNS: &str = "SELECT id, pomodoro_id, started_at, ended_at, credited_duration FROM pauses";
const FINALIZE_PAUSE: &str =
    "UPDATE pauses SET ended_at = ?1, credited_duration = ?2 WHERE id = ?3 AND ended_at IS NULL";

pub struct Pauses<'a> {
    conn: &'a Connection,
}

impl<'a> Pauses<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Pauses { conn }
    }

    pub fn insert(&self, pomodoro_id: i64, started_at: &DateTime<Utc>) -> Result<i64> {
        self.conn
            .execute(INSERT_PAUSE, params![pomodoro_id, timestamps::to_sql(started_at)])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Pause>> {
        self.conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), [id], map_pause)
            .optional()
    }

    pub fn fetch_by_pomodoro(&self, pomodoro_id: i64) -> Result<Vec<Pause>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE pomodoro_id = ?1 ORDER BY id", SELECT_COLUMNS))?;
        let pauses = stmt.query_map([pomodoro_id], map_pause)?.collect::<Result<Vec<_>>>()?;
        Ok(pauses)
    }

    /// Closes an open pause. Returns 0 if it was already finalized.
    pub fn finalize(&self, id: i64, ended_at: &DateTime<Utc>, credited: i64) -> Result<usize> {
        self.conn
            .execute(FINALIZE_PAUSE, params![timestamps::to_sql(ended_at), credited, id])
    }
}

fn map_pause(row: &Row) -> Result<Pause> {
    Ok(Pause {
        id: row.get(0)?,
        pomodoro_id: row.get(1)?,
        started_at: timestamps::column(row, 2)?,
        ended_at: timestamps::optional_column(row, 3)?,
        credited_duration: row.get(4)?,
    })
}
