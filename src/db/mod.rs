//! Database layer for pomolog.
//!
//! SQLite persistence for users, sessions, reference data, pomodoros and
//! pauses. Each table has a small repository that borrows a `&Connection`,
//! so several repositories can work inside one caller-owned transaction.
//!
//! ## Usage
//!
//! ```rust
//! use pomolog::db::{db::Db, rules::Rules, users::Users};
//! use chrono::Utc;
//!
//! let db = Db::in_memory()?;
//! let user_id = Users::new(&db.conn).insert("carlos", None, &Utc::now())?;
//! let popular = Rules::new(&db.conn).get_by_name("popular")?;
//! assert_eq!(popular.map(|r| r.focus_duration), Some(25));
//! # let _ = user_id;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;
pub mod migrations;
pub mod pauses;
pub mod pomodoros;
pub mod rules;
pub mod sessions;
pub mod timestamps;
pub mod types;
pub mod users;
