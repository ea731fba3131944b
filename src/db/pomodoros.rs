//! Pomodoros table.
//!
//! The terminal transition is a guarded update: it only matches rows still in
//! the `open` state, so a second completion or cancellation touches nothing.

use crate::db::timestamps;
use crate::libs::pomodoro::{EventKind, NewPomodoro, Pomodoro, PomodoroState};
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_POMODORO: &str = "INSERT INTO pomodoros \
     (session_id, rule_id, type_id, event_kind, planned_duration, started_at, state, notes) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'open', ?7)";
const SELECT_COLUMNS: &str = "SELECT id, session_id, rule_id, type_id, event_kind, planned_duration, \
     started_at, ended_at, state, credited_duration, notes FROM pomodoros";
const FINISH_POMODORO: &str = "UPDATE pomodoros SET state = ?1, ended_at = ?2, credited_duration = ?3 \
     WHERE id = ?4 AND state = 'open' AND ended_at IS NULL";
const COUNT_COMPLETED_FOR_USER: &str = "SELECT COUNT(*) FROM pomodoros p \
     JOIN sessions s ON s.id = p.session_id \
     WHERE s.user_id = ?1 AND p.state = 'completed'";

pub struct Pomodoros<'a> {
    conn: &'a Connection,
}

impl<'a> Pomodoros<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Pomodoros { conn }
    }

    pub fn insert(&self, pomodoro: &NewPomodoro, started_at: &DateTime<Utc>) -> Result<i64> {
        self.conn.execute(
            INSERT_POMODORO,
            params![
                pomodoro.session_id,
                pomodoro.rule_id,
                pomodoro.type_id,
                pomodoro.event_kind.as_str(),
                pomodoro.planned_duration,
                timestamps::to_sql(started_at),
                pomodoro.notes,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Pomodoro>> {
        self.conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), [id], map_pomodoro)
            .optional()
    }

    /// Pomodoros of a session in insertion order.
    pub fn fetch_by_session(&self, session_id: i64) -> Result<Vec<Pomodoro>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE session_id = ?1 ORDER BY id", SELECT_COLUMNS))?;
        let pomodoros = stmt.query_map([session_id], map_pomodoro)?.collect::<Result<Vec<_>>>()?;
        Ok(pomodoros)
    }

    /// Moves an open pomodoro to `state`. Returns 0 if it was not open.
    pub fn finish(&self, id: i64, state: PomodoroState, ended_at: &DateTime<Utc>, credited: i64) -> Result<usize> {
        self.conn.execute(
            FINISH_POMODORO,
            params![state.as_str(), timestamps::to_sql(ended_at), credited, id],
        )
    }

    pub fn count_completed_for_user(&self, user_id: i64) -> Result<i64> {
        self.conn.query_row(COUNT_COMPLETED_FOR_USER, [user_id], |row| row.get(0))
    }
}

fn map_pomodoro(row: &Row) -> Result<Pomodoro> {
    let event_kind: String = row.get(4)?;
    let state: String = row.get(8)?;

    Ok(Pomodoro {
        id: row.get(0)?,
        session_id: row.get(1)?,
        rule_id: row.get(2)?,
        type_id: row.get(3)?,
        event_kind: event_kind
            .parse::<EventKind>()
            .map_err(|e: String| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, e.into()))?,
        planned_duration: row.get(5)?,
        started_at: timestamps::column(row, 6)?,
        ended_at: timestamps::optional_column(row, 7)?,
        state: state
            .parse::<PomodoroState>()
            .map_err(|e: String| rusqlite::Error::FromSqlConversionFailure(8, Type::Text, e.into()))?,
        credited_duration: row.get(9)?,
        notes: row.get(10)?,
    })
}
