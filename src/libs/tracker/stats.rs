use super::Tracker;
use crate::db::pomodoros::Pomodoros;
use crate::db::sessions::Sessions;
use crate::db::users::Users;
use crate::libs::error::{Entity, TrackerError, TrackerResult};
use crate::libs::stats::UserStatistics;
use tracing::debug;

impl Tracker {
    /// Sums the totals of all of a user's sessions and counts their
    /// completed pomodoros. Cancelled pomodoros are not counted.
    pub fn user_statistics(&self, user_id: i64) -> TrackerResult<UserStatistics> {
        let stats = self.read(|conn| {
            // one snapshot for all three queries
            let tx = conn.unchecked_transaction()?;
            let conn: &rusqlite::Connection = &tx;
            if !Users::new(conn).exists(user_id)? {
                return Err(TrackerError::not_found(Entity::User, user_id));
            }
            let totals = Sessions::new(conn).totals_for_user(user_id)?;
            let completed = Pomodoros::new(conn).count_completed_for_user(user_id)?;

            Ok(UserStatistics {
                user_id,
                focus_total: totals.focus_total,
                break_total: totals.break_total,
                pause_total: totals.pause_total,
                session_count: totals.count,
                completed_pomodoro_count: completed,
            })
        })?;

        debug!(user_id, sessions = stats.session_count, "Statistics computed");
        Ok(stats)
    }
}
