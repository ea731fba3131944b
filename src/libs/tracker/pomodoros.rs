use super::sessions::add_to_total;
use super::Tracker;
use crate::db::pomodoros::Pomodoros;
use crate::db::rules::Rules;
use crate::db::sessions::Sessions;
use crate::db::types::PomodoroTypes;
use crate::libs::accounting::{credit_interval, elapsed_units};
use crate::libs::error::{Entity, TrackerError, TrackerResult};
use crate::libs::pomodoro::{Pomodoro, PomodoroState, StartPomodoroRequest};
use crate::libs::session::TotalKind;
use tracing::info;

impl Tracker {
    /// Starts an open pomodoro. Session totals are untouched until it ends.
    ///
    /// The request is validated first; then session, rule and type are
    /// checked in that order and the first missing one is reported.
    pub fn start_pomodoro(&self, request: StartPomodoroRequest) -> TrackerResult<Pomodoro> {
        let new = request.validate()?;

        let pomodoro = self.write(|tx, now| {
            if !Sessions::new(tx).exists(new.session_id)? {
                return Err(TrackerError::not_found(Entity::Session, new.session_id));
            }
            if !Rules::new(tx).exists(new.rule_id)? {
                return Err(TrackerError::not_found(Entity::Rule, new.rule_id));
            }
            if !PomodoroTypes::new(tx).exists(new.type_id)? {
                return Err(TrackerError::not_found(Entity::Type, new.type_id));
            }

            let pomodoros = Pomodoros::new(tx);
            let id = pomodoros.insert(&new, &now)?;
            pomodoros.get_by_id(id)?.ok_or_else(|| TrackerError::not_found(Entity::Pomodoro, id))
        })?;

        info!(
            pomodoro_id = pomodoro.id,
            session_id = pomodoro.session_id,
            event_kind = %pomodoro.event_kind,
            planned = pomodoro.planned_duration,
            "Pomodoro started"
        );
        Ok(pomodoro)
    }

    /// Completes an open pomodoro and credits its session.
    pub fn complete_pomodoro(&self, id: i64) -> TrackerResult<Pomodoro> {
        self.finish_pomodoro(id, PomodoroState::Completed)
    }

    /// Cancels an open pomodoro. Elapsed time is credited exactly as on completion.
    pub fn cancel_pomodoro(&self, id: i64) -> TrackerResult<Pomodoro> {
        self.finish_pomodoro(id, PomodoroState::Cancelled)
    }

    pub fn get_pomodoro(&self, id: i64) -> TrackerResult<Pomodoro> {
        self.read(|conn| {
            Pomodoros::new(conn)
                .get_by_id(id)?
                .ok_or_else(|| TrackerError::not_found(Entity::Pomodoro, id))
        })
    }

    /// Pomodoros of a session in insertion order. Empty for an unknown session.
    pub fn list_pomodoros(&self, session_id: i64) -> TrackerResult<Vec<Pomodoro>> {
        self.read(|conn| Ok(Pomodoros::new(conn).fetch_by_session(session_id)?))
    }

    fn finish_pomodoro(&self, id: i64, target: PomodoroState) -> TrackerResult<Pomodoro> {
        let unit = self.unit;

        let pomodoro = self.write(|tx, now| {
            let pomodoros = Pomodoros::new(tx);
            let current = pomodoros
                .get_by_id(id)?
                .ok_or_else(|| TrackerError::not_found(Entity::Pomodoro, id))?;
            if current.state.is_terminal() {
                return Err(TrackerError::invalid_state(Entity::Pomodoro, id, current.state));
            }

            let credited = credit_interval(elapsed_units(current.started_at, now, unit), current.planned_duration);
            if pomodoros.finish(id, target, &now, credited)? == 0 {
                return Err(TrackerError::invalid_state(Entity::Pomodoro, id, "finished"));
            }

            let kind = TotalKind::from(current.event_kind);
            add_to_total(tx, current.session_id, kind, credited)?;

            pomodoros.get_by_id(id)?.ok_or_else(|| TrackerError::not_found(Entity::Pomodoro, id))
        })?;

        info!(
            pomodoro_id = id,
            session_id = pomodoro.session_id,
            state = %pomodoro.state,
            credited = pomodoro.credited_duration.unwrap_or_default(),
            "Pomodoro finished"
        );
        Ok(pomodoro)
    }
}
