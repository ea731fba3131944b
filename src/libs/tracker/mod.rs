//! The tracking core.
//!
//! [`Tracker`] owns one SQLite connection and exposes every operation of the
//! system: users, sessions and their totals, reference data, the pomodoro
//! state machine, pauses and per-user statistics.
//!
//! ## Atomicity
//!
//! Each mutating operation runs as one `BEGIN IMMEDIATE` transaction. The
//! current time is read only after the write lock is held, the state check
//! and the state change happen inside the same transaction, and session
//! totals are only ever incremented in place. A failure at any step rolls
//! the whole operation back, so a pomodoro is never left terminal without its
//! session credit (or the other way around).
//!
//! Clones share the connection. Independent trackers opened on the same file
//! are serialized by SQLite's write lock, bounded by the busy timeout.
//!
//! ## Usage
//!
//! ```rust
//! use pomolog::libs::clock::SystemClock;
//! use pomolog::libs::accounting::TimeUnit;
//! use pomolog::libs::pomodoro::StartPomodoroRequest;
//! use pomolog::libs::tracker::Tracker;
//! use std::sync::Arc;
//!
//! let tracker = Tracker::in_memory(Arc::new(SystemClock), TimeUnit::Minutes)?;
//! let user = tracker.create_user("carlos", None)?;
//! let session = tracker.create_session(user.id, "Calculus", None)?;
//! let pomodoro = tracker.start_pomodoro(StartPomodoroRequest {
//!     session_id: session.id,
//!     rule_id: 2,
//!     type_id: 1,
//!     event_kind: "focus".into(),
//!     planned_duration: 25,
//!     notes: None,
//! })?;
//! let done = tracker.complete_pomodoro(pomodoro.id)?;
//! assert_eq!(done.credited_duration, Some(1));
//! # Ok::<(), anyhow::Error>(())
//! ```

mod pauses;
mod pomodoros;
mod reference;
mod sessions;
mod stats;
mod users;

use crate::db::db::Db;
use crate::libs::accounting::TimeUnit;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::error::TrackerResult;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct Tracker {
    conn: Arc<Mutex<Connection>>,
    clock: Arc<dyn Clock>,
    unit: TimeUnit,
}

impl Tracker {
    pub fn new(db: Db, clock: Arc<dyn Clock>, unit: TimeUnit) -> Self {
        Tracker {
            conn: Arc::new(Mutex::new(db.conn)),
            clock,
            unit,
        }
    }

    /// Opens the configured database with the wall clock.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let db = Db::open_with_timeout(config.database_path()?, Duration::from_millis(config.busy_timeout_ms))?;
        Ok(Self::new(db, Arc::new(SystemClock), config.time_unit))
    }

    pub fn open(path: impl AsRef<Path>, clock: Arc<dyn Clock>, unit: TimeUnit) -> anyhow::Result<Self> {
        Ok(Self::new(Db::open(path)?, clock, unit))
    }

    pub fn in_memory(clock: Arc<dyn Clock>, unit: TimeUnit) -> anyhow::Result<Self> {
        Ok(Self::new(Db::in_memory()?, clock, unit))
    }

    /// Unit in which planned and credited durations are expressed.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Runs `op` in an immediate transaction, handing it the current time.
    /// Any error rolls the transaction back.
    fn write<T>(&self, op: impl FnOnce(&Transaction, DateTime<Utc>) -> TrackerResult<T>) -> TrackerResult<T> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let now = self.clock.now();
        let value = op(&tx, now)?;
        tx.commit()?;
        Ok(value)
    }

    fn read<T>(&self, op: impl FnOnce(&Connection) -> TrackerResult<T>) -> TrackerResult<T> {
        let conn = self.conn.lock();
        op(&conn)
    }
}
