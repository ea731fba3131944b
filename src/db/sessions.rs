//! Sessions table: per-session running totals.
//!
//! Totals are only ever changed with an in-place increment
//! (`total = total + ?`), never by writing back a value read earlier, so
//! concurrent credits to one session cannot lose updates.

use crate::db::timestamps;
use crate::libs::session::{Session, TotalKind};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_SESSION: &str = "INSERT INTO sessions (user_id, name, description, created_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_COLUMNS: &str =
    "SELECT id, user_id, name, description, created_at, total_focus, total_break, total_pause FROM sessions";
const SELECT_USER_TOTALS: &str = "SELECT COALESCE(SUM(total_focus), 0), COALESCE(SUM(total_break), 0), \
     COALESCE(SUM(total_pause), 0), COUNT(*) FROM sessions WHERE user_id = ?1";

/// Sums over one user's sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTotals {
    pub focus_total: i64,
    pub break_total: i64,
    pub pause_total: i64,
    pub count: i64,
}

pub struct Sessions<'a> {
    conn: &'a Connection,
}

impl<'a> Sessions<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Sessions { conn }
    }

    pub fn insert(&self, user_id: i64, name: &str, description: Option<&str>, created_at: &DateTime<Utc>) -> Result<i64> {
        self.conn.execute(
            INSERT_SESSION,
            params![user_id, name, description, timestamps::to_sql(created_at)],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Session>> {
        self.conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), [id], map_session)
            .optional()
    }

    pub fn exists(&self, id: i64) -> Result<bool> {
        self.conn
            .query_row("SELECT EXISTS(SELECT 1 FROM sessions WHERE id = ?1)", [id], |row| row.get(0))
    }

    /// Sessions of a user in creation order.
    pub fn fetch_by_user(&self, user_id: i64) -> Result<Vec<Session>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE user_id = ?1 ORDER BY id", SELECT_COLUMNS))?;
        let sessions = stmt.query_map([user_id], map_session)?.collect::<Result<Vec<_>>>()?;
        Ok(sessions)
    }

    /// Adds a non-negative `amount` to one total. Returns the number of rows
    /// touched: 0 when the session does not exist or the sum would leave the
    /// 64-bit integer range (SQLite would otherwise store it as REAL).
    pub fn increment(&self, id: i64, kind: TotalKind, amount: i64) -> Result<usize> {
        let column = kind.column();
        self.conn.execute(
            &format!(
                "UPDATE sessions SET {column} = {column} + ?1 WHERE id = ?2 AND {column} <= {max} - ?1",
                max = i64::MAX
            ),
            params![amount, id],
        )
    }

    pub fn total(&self, id: i64, kind: TotalKind) -> Result<Option<i64>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM sessions WHERE id = ?1", kind.column()),
                [id],
                |row| row.get(0),
            )
            .optional()
    }

    pub fn totals_for_user(&self, user_id: i64) -> Result<SessionTotals> {
        self.conn.query_row(SELECT_USER_TOTALS, [user_id], |row| {
            Ok(SessionTotals {
                focus_total: row.get(0)?,
                break_total: row.get(1)?,
                pause_total: row.get(2)?,
                count: row.get(3)?,
            })
        })
    }
}

fn map_session(row: &Row) -> Result<Session> {
    Ok(Session {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        created_at: timestamps::column(row, 4)?,
        total_focus: row.get(5)?,
        total_break: row.get(6)?,
        total_pause: row.get(7)?,
    })
}
