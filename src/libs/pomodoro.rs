//! Pomodoro intervals: one timed focus or break period inside a session.

use crate::libs::error::{TrackerError, TrackerResult};
use crate::libs::validate::validate_optional;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of interval. Decides which session total receives the credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Focus,
    Break,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Focus => "focus",
            EventKind::Break => "break",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = String;

    /// Only the exact lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "focus" => Ok(EventKind::Focus),
            "break" => Ok(EventKind::Break),
            other => Err(format!("event kind must be 'focus' or 'break', got '{}'", other)),
        }
    }
}

/// Lifecycle state. `Open` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PomodoroState {
    Open,
    Completed,
    Cancelled,
}

impl PomodoroState {
    pub fn as_str(self) -> &'static str {
        match self {
            PomodoroState::Open => "open",
            PomodoroState::Completed => "completed",
            PomodoroState::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, PomodoroState::Open)
    }
}

impl fmt::Display for PomodoroState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PomodoroState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(PomodoroState::Open),
            "completed" => Ok(PomodoroState::Completed),
            "cancelled" => Ok(PomodoroState::Cancelled),
            other => Err(format!("unknown pomodoro state '{}'", other)),
        }
    }
}

/// A stored pomodoro record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pomodoro {
    pub id: i64,
    pub session_id: i64,
    pub rule_id: i64,
    pub type_id: i64,
    pub event_kind: EventKind,
    /// Planned length in whole time units, always positive.
    pub planned_duration: i64,
    pub started_at: DateTime<Utc>,
    /// Set together with `credited_duration` when the record turns terminal.
    pub ended_at: Option<DateTime<Utc>>,
    pub state: PomodoroState,
    pub credited_duration: Option<i64>,
    pub notes: Option<String>,
}

impl Pomodoro {
    pub fn is_completed(&self) -> bool {
        self.state == PomodoroState::Completed
    }

    pub fn is_open(&self) -> bool {
        self.state == PomodoroState::Open
    }
}

/// Validated input for starting a pomodoro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPomodoro {
    pub session_id: i64,
    pub rule_id: i64,
    pub type_id: i64,
    pub event_kind: EventKind,
    pub planned_duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Loosely-typed start request as it arrives from a caller (CLI arguments or
/// a JSON body). [`StartPomodoroRequest::validate`] turns it into a
/// [`NewPomodoro`] or rejects it before any lookup happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartPomodoroRequest {
    pub session_id: i64,
    pub rule_id: i64,
    pub type_id: i64,
    pub event_kind: String,
    pub planned_duration: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl StartPomodoroRequest {
    pub fn validate(self) -> TrackerResult<NewPomodoro> {
        let event_kind: EventKind = self.event_kind.parse().map_err(TrackerError::InvalidArgument)?;
        if self.planned_duration <= 0 {
            return Err(TrackerError::InvalidArgument(format!(
                "planned duration must be positive, got {}",
                self.planned_duration
            )));
        }
        let notes = self.notes.filter(|n| !n.trim().is_empty());
        validate_optional("notes", notes.as_deref())?;

        Ok(NewPomodoro {
            session_id: self.session_id,
            rule_id: self.rule_id,
            type_id: self.type_id,
            event_kind,
            planned_duration: self.planned_duration,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_is_a_closed_set() {
        assert_eq!("focus".parse::<EventKind>().unwrap(), EventKind::Focus);
        assert_eq!("break".parse::<EventKind>().unwrap(), EventKind::Break);
        assert!("invalid".parse::<EventKind>().is_err());
        assert!("Focus".parse::<EventKind>().is_err());
        assert!("".parse::<EventKind>().is_err());
    }

    #[test]
    fn test_state_round_trips_through_storage_names() {
        for state in [PomodoroState::Open, PomodoroState::Completed, PomodoroState::Cancelled] {
            assert_eq!(state.as_str().parse::<PomodoroState>().unwrap(), state);
        }
        assert!(!PomodoroState::Open.is_terminal());
        assert!(PomodoroState::Cancelled.is_terminal());
    }

    #[test]
    fn test_new_pomodoro_from_json_request() {
        let request = r#"{"session_id":1,"rule_id":2,"type_id":3,"event_kind":"break","planned_duration":5}"#;
        let parsed: NewPomodoro = serde_json::from_str(request).unwrap();
        assert_eq!(parsed.event_kind, EventKind::Break);
        assert_eq!(parsed.notes, None);

        let bad = r#"{"session_id":1,"rule_id":2,"type_id":3,"event_kind":"nap","planned_duration":5}"#;
        assert!(serde_json::from_str::<NewPomodoro>(bad).is_err());
    }

    fn request(event_kind: &str, planned: i64) -> StartPomodoroRequest {
        StartPomodoroRequest {
            session_id: 1,
            rule_id: 2,
            type_id: 1,
            event_kind: event_kind.to_string(),
            planned_duration: planned,
            notes: None,
        }
    }

    #[test]
    fn test_request_validation() {
        let new = request("focus", 25).validate().unwrap();
        assert_eq!(new.event_kind, EventKind::Focus);
        assert_eq!(new.planned_duration, 25);

        assert!(matches!(request("invalid", 25).validate(), Err(TrackerError::InvalidArgument(_))));
        assert!(matches!(request("break", 0).validate(), Err(TrackerError::InvalidArgument(_))));

        let mut with_notes = request("break", 5);
        with_notes.notes = Some("stretch; then coffee".into());
        assert!(with_notes.validate().is_err());
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let mut blank = request("focus", 10);
        blank.notes = Some("  ".into());
        assert_eq!(blank.validate().unwrap().notes, None);
    }
}
