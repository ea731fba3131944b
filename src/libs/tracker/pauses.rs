use super::sessions::add_to_total;
use super::Tracker;
use crate::db::pauses::Pauses;
use crate::db::pomodoros::Pomodoros;
use crate::libs::accounting::{credit_pause, elapsed_units};
use crate::libs::error::{Entity, TrackerError, TrackerResult};
use crate::libs::pause::Pause;
use crate::libs::session::TotalKind;
use tracing::{info, warn};

impl Tracker {
    /// Opens a pause inside a pomodoro.
    ///
    /// The pomodoro does not have to be open; pauses on completed or
    /// cancelled pomodoros are accepted and logged.
    pub fn start_pause(&self, pomodoro_id: i64) -> TrackerResult<Pause> {
        let pause = self.write(|tx, now| {
            let pomodoro = Pomodoros::new(tx)
                .get_by_id(pomodoro_id)?
                .ok_or_else(|| TrackerError::not_found(Entity::Pomodoro, pomodoro_id))?;
            if pomodoro.state.is_terminal() {
                warn!(pomodoro_id, state = %pomodoro.state, "Pause started on a finished pomodoro");
            }

            let pauses = Pauses::new(tx);
            let id = pauses.insert(pomodoro_id, &now)?;
            pauses.get_by_id(id)?.ok_or_else(|| TrackerError::not_found(Entity::Pause, id))
        })?;

        info!(pause_id = pause.id, pomodoro_id, "Pause started");
        Ok(pause)
    }

    /// Closes an open pause and credits the pause total of the owning
    /// session. The credit is at least one unit and has no upper bound.
    pub fn finalize_pause(&self, id: i64) -> TrackerResult<Pause> {
        let unit = self.unit;

        let pause = self.write(|tx, now| {
            let pauses = Pauses::new(tx);
            let current = pauses.get_by_id(id)?.ok_or_else(|| TrackerError::not_found(Entity::Pause, id))?;
            if current.is_finalized() {
                return Err(TrackerError::invalid_state(Entity::Pause, id, "finalized"));
            }

            let pomodoro = Pomodoros::new(tx)
                .get_by_id(current.pomodoro_id)?
                .ok_or_else(|| TrackerError::not_found(Entity::Pomodoro, current.pomodoro_id))?;
            if pomodoro.state.is_terminal() {
                warn!(pause_id = id, pomodoro_id = pomodoro.id, state = %pomodoro.state, "Pause finalized on a finished pomodoro");
            }

            let credited = credit_pause(elapsed_units(current.started_at, now, unit));
            if pauses.finalize(id, &now, credited)? == 0 {
                return Err(TrackerError::invalid_state(Entity::Pause, id, "finalized"));
            }
            add_to_total(tx, pomodoro.session_id, TotalKind::Pause, credited)?;

            pauses.get_by_id(id)?.ok_or_else(|| TrackerError::not_found(Entity::Pause, id))
        })?;

        info!(pause_id = id, credited = pause.credited_duration, "Pause finalized");
        Ok(pause)
    }

    pub fn get_pause(&self, id: i64) -> TrackerResult<Pause> {
        self.read(|conn| Pauses::new(conn).get_by_id(id)?.ok_or_else(|| TrackerError::not_found(Entity::Pause, id)))
    }

    /// Pauses of a pomodoro in insertion order. Empty for an unknown pomodoro.
    pub fn list_pauses(&self, pomodoro_id: i64) -> TrackerResult<Vec<Pause>> {
        self.read(|conn| Ok(Pauses::new(conn).fetch_by_pomodoro(pomodoro_id)?))
    }
}
