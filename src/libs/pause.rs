//! Pauses: suspension periods nested inside a pomodoro.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored pause record.
///
/// A pause is open until `ended_at` is set; finalization also fixes the
/// credited duration, which stays `0` while the pause is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pause {
    pub id: i64,
    pub pomodoro_id: i64,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub credited_duration: i64,
}

impl Pause {
    pub fn is_finalized(&self) -> bool {
        self.ended_at.is_some()
    }
}
