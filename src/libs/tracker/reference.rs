use super::Tracker;
use crate::db::rules::Rules;
use crate::db::types::PomodoroTypes;
use crate::libs::error::{Entity, TrackerError, TrackerResult};
use crate::libs::policy::{DurationRule, PomodoroType};

impl Tracker {
    pub fn list_rules(&self) -> TrackerResult<Vec<DurationRule>> {
        self.read(|conn| Ok(Rules::new(conn).fetch_all()?))
    }

    pub fn get_rule(&self, id: i64) -> TrackerResult<DurationRule> {
        self.read(|conn| Rules::new(conn).get_by_id(id)?.ok_or_else(|| TrackerError::not_found(Entity::Rule, id)))
    }

    /// Case-insensitive lookup, e.g. `"popular"`.
    pub fn find_rule(&self, name: &str) -> TrackerResult<DurationRule> {
        self.read(|conn| {
            Rules::new(conn)
                .get_by_name(name)?
                .ok_or_else(|| TrackerError::not_found(Entity::Rule, name))
        })
    }

    pub fn list_types(&self) -> TrackerResult<Vec<PomodoroType>> {
        self.read(|conn| Ok(PomodoroTypes::new(conn).fetch_all()?))
    }

    pub fn get_type(&self, id: i64) -> TrackerResult<PomodoroType> {
        self.read(|conn| {
            PomodoroTypes::new(conn)
                .get_by_id(id)?
                .ok_or_else(|| TrackerError::not_found(Entity::Type, id))
        })
    }
}
