//! Read-only reference data: duration presets and category tags.

use serde::{Deserialize, Serialize};

/// A named focus/break duration preset, e.g. "Popular" = 25/5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRule {
    pub id: i64,
    pub name: String,
    pub focus_duration: i64,
    pub break_duration: i64,
    pub description: Option<String>,
}

/// A named category tag such as "Study" or "Work".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroType {
    pub id: i64,
    pub name: String,
}

/// Presets written by the seed migration: (name, focus, break, description).
pub const DEFAULT_RULES: &[(&str, i64, i64, &str)] = &[
    ("Baby Step", 10, 5, "Short warm-up intervals"),
    ("Popular", 25, 5, "The classic Pomodoro rhythm"),
    ("Medium", 40, 8, "Longer focus for steady work"),
    ("Intense", 50, 10, "Deep work blocks"),
    ("Extended", 90, 15, "Full focus cycles"),
];

/// Category tags written by the seed migration.
pub const DEFAULT_TYPES: &[&str] = &["Study", "Work", "Reading", "Active Break"];
