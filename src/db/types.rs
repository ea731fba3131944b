use crate::libs::policy::PomodoroType;
use rusqlite::{Connection, OptionalExtension, Result, Row};

/// Read-only access to pomodoro category tags.
pub struct PomodoroTypes<'a> {
    conn: &'a Connection,
}

impl<'a> PomodoroTypes<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        PomodoroTypes { conn }
    }

    pub fn fetch_all(&self) -> Result<Vec<PomodoroType>> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM pomodoro_types ORDER BY id")?;
        let types = stmt.query_map([], map_type)?.collect::<Result<Vec<_>>>()?;
        Ok(types)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<PomodoroType>> {
        self.conn
            .query_row("SELECT id, name FROM pomodoro_types WHERE id = ?1", [id], map_type)
            .optional()
    }

    pub fn exists(&self, id: i64) -> Result<bool> {
        self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM pomodoro_types WHERE id = ?1)",
            [id],
            |row| row.get(0),
        )
    }
}

fn map_type(row: &Row) -> Result<PomodoroType> {
    Ok(PomodoroType {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
