use crate::libs::policy::DurationRule;
use rusqlite::{Connection, OptionalExtension, Result, Row};

const SELECT_COLUMNS: &str = "SELECT id, name, focus_duration, break_duration, description FROM rules";

/// Read-only access to duration presets.
pub struct Rules<'a> {
    conn: &'a Connection,
}

impl<'a> Rules<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Rules { conn }
    }

    pub fn fetch_all(&self) -> Result<Vec<DurationRule>> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
        let rules = stmt.query_map([], map_rule)?.collect::<Result<Vec<_>>>()?;
        Ok(rules)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<DurationRule>> {
        self.conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), [id], map_rule)
            .optional()
    }

    /// Case-insensitive lookup by name.
    pub fn get_by_name(&self, name: &str) -> Result<Option<DurationRule>> {
        self.conn
            .query_row(
                &format!("{} WHERE name = ?1 COLLATE NOCASE", SELECT_COLUMNS),
                [name],
                map_rule,
            )
            .optional()
    }

    pub fn exists(&self, id: i64) -> Result<bool> {
        self.conn
            .query_row("SELECT EXISTS(SELECT 1 FROM rules WHERE id = ?1)", [id], |row| row.get(0))
    }
}

fn map_rule(row: &Row) -> Result<DurationRule> {
    Ok(DurationRule {
        id: row.get(0)?,
        name: row.get(1)?,
        focus_duration: row.get(2)?,
        break_duration: row.get(3)?,
        description: row.get(4)?,
    })
}
