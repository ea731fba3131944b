use super::Tracker;
use crate::db::sessions::Sessions;
use crate::db::users::Users;
use crate::libs::error::{Entity, TrackerError, TrackerResult};
use crate::libs::session::{Session, TotalKind};
use crate::libs::validate::{validate_optional, validate_text};
use rusqlite::Connection;
use tracing::info;

/// Increments one total of a session inside the caller's transaction.
/// Fails with `NotFound` for a missing session and with `InvalidArgument`
/// when the sum would not fit in an `i64`.
pub(super) fn add_to_total(conn: &Connection, session_id: i64, kind: TotalKind, amount: i64) -> TrackerResult<()> {
    let sessions = Sessions::new(conn);
    if sessions.increment(session_id, kind, amount)? > 0 {
        return Ok(());
    }
    if !sessions.exists(session_id)? {
        return Err(TrackerError::not_found(Entity::Session, session_id));
    }
    Err(TrackerError::InvalidArgument(format!(
        "{} total of session {} would overflow when adding {}",
        kind, session_id, amount
    )))
}

impl Tracker {
    /// Creates an empty session for an existing user.
    pub fn create_session(&self, user_id: i64, name: &str, description: Option<&str>) -> TrackerResult<Session> {
        let name = name.trim();
        let description = description.map(str::trim).filter(|d| !d.is_empty());
        validate_text("name", name)?;
        validate_optional("description", description)?;

        let session = self.write(|tx, now| {
            if !Users::new(tx).exists(user_id)? {
                return Err(TrackerError::not_found(Entity::User, user_id));
            }
            let sessions = Sessions::new(tx);
            let id = sessions.insert(user_id, name, description, &now)?;
            sessions.get_by_id(id)?.ok_or_else(|| TrackerError::not_found(Entity::Session, id))
        })?;

        info!(session_id = session.id, user_id, name = %session.name, "Session created");
        Ok(session)
    }

    pub fn get_session(&self, id: i64) -> TrackerResult<Session> {
        self.read(|conn| Sessions::new(conn).get_by_id(id)?.ok_or_else(|| TrackerError::not_found(Entity::Session, id)))
    }

    /// Sessions of a user, oldest first. Empty when the user has none or
    /// does not exist.
    pub fn list_sessions(&self, user_id: i64) -> TrackerResult<Vec<Session>> {
        self.read(|conn| Ok(Sessions::new(conn).fetch_by_user(user_id)?))
    }

    /// Adds `amount` to one running total and returns the new total.
    ///
    /// Totals never decrease, so negative amounts are rejected.
    pub fn credit(&self, session_id: i64, kind: TotalKind, amount: i64) -> TrackerResult<i64> {
        if amount < 0 {
            return Err(TrackerError::InvalidArgument(format!(
                "credit amount must not be negative, got {}",
                amount
            )));
        }

        let total = self.write(|tx, _| {
            add_to_total(tx, session_id, kind, amount)?;
            Sessions::new(tx)
                .total(session_id, kind)?
                .ok_or_else(|| TrackerError::not_found(Entity::Session, session_id))
        })?;

        info!(session_id, kind = %kind, amount, total, "Session credited");
        Ok(total)
    }

    pub fn credit_focus(&self, session_id: i64, amount: i64) -> TrackerResult<i64> {
        self.credit(session_id, TotalKind::Focus, amount)
    }

    pub fn credit_break(&self, session_id: i64, amount: i64) -> TrackerResult<i64> {
        self.credit(session_id, TotalKind::Break, amount)
    }

    pub fn credit_pause(&self, session_id: i64, amount: i64) -> TrackerResult<i64> {
        self.credit(session_id, TotalKind::Pause, amount)
    }
}
