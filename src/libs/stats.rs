use serde::{Deserialize, Serialize};

/// Per-user aggregate over all of the user's sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatistics {
    pub user_id: i64,
    pub focus_total: i64,
    pub break_total: i64,
    pub pause_total: i64,
    pub session_count: i64,
    pub completed_pomodoro_count: i64,
}
