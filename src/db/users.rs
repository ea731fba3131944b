use crate::db::timestamps;
use crate::libs::user::User;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_USER: &str = "INSERT INTO users (nickname, email, created_at) VALUES (?1, ?2, ?3)";
const SELECT_COLUMNS: &str = "SELECT id, nickname, email, created_at FROM users";
const DELETE_USER: &str = "DELETE FROM users WHERE id = ?1";

pub struct Users<'a> {
    conn: &'a Connection,
}

impl<'a> Users<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Users { conn }
    }

    pub fn insert(&self, nickname: &str, email: Option<&str>, created_at: &DateTime<Utc>) -> Result<i64> {
        self.conn
            .execute(INSERT_USER, params![nickname, email, timestamps::to_sql(created_at)])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        self.conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), [id], map_user)
            .optional()
    }

    pub fn get_by_nickname(&self, nickname: &str) -> Result<Option<User>> {
        self.conn
            .query_row(&format!("{} WHERE nickname = ?1", SELECT_COLUMNS), [nickname], map_user)
            .optional()
    }

    pub fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        self.conn
            .query_row(&format!("{} WHERE email = ?1", SELECT_COLUMNS), [email], map_user)
            .optional()
    }

    pub fn exists(&self, id: i64) -> Result<bool> {
        self.conn
            .query_row("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?1)", [id], |row| row.get(0))
    }

    pub fn fetch_all(&self) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
        let users = stmt.query_map([], map_user)?.collect::<Result<Vec<_>>>()?;
        Ok(users)
    }

    /// Deletes the user; sessions, pomodoros and pauses go with it.
    pub fn delete(&self, id: i64) -> Result<usize> {
        self.conn.execute(DELETE_USER, [id])
    }
}

fn map_user(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get(0)?,
        nickname: row.get(1)?,
        email: row.get(2)?,
        created_at: timestamps::column(row, 3)?,
    })
}
