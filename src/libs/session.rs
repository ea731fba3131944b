//! Work sessions and their running totals.

use crate::libs::pomodoro::EventKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user-declared block of work accumulating focus, break and pause time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub total_focus: i64,
    pub total_break: i64,
    pub total_pause: i64,
}

/// Which running total a credit goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalKind {
    Focus,
    Break,
    Pause,
}

impl TotalKind {
    /// Column holding this total in the `sessions` table.
    pub fn column(self) -> &'static str {
        match self {
            TotalKind::Focus => "total_focus",
            TotalKind::Break => "total_break",
            TotalKind::Pause => "total_pause",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TotalKind::Focus => "focus",
            TotalKind::Break => "break",
            TotalKind::Pause => "pause",
        }
    }
}

impl fmt::Display for TotalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TotalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "focus" => Ok(TotalKind::Focus),
            "break" => Ok(TotalKind::Break),
            "pause" => Ok(TotalKind::Pause),
            other => Err(format!("total must be 'focus', 'break' or 'pause', got '{}'", other)),
        }
    }
}

/// A finished pomodoro credits the total matching its event kind.
impl From<EventKind> for TotalKind {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Focus => TotalKind::Focus,
            EventKind::Break => TotalKind::Break,
        }
    }
}

impl Session {
    pub fn total(&self, kind: TotalKind) -> i64 {
        match kind {
            TotalKind::Focus => self.total_focus,
            TotalKind::Break => self.total_break,
            TotalKind::Pause => self.total_pause,
        }
    }
}
