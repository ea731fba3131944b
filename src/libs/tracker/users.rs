use super::Tracker;
use crate::db::users::Users;
use crate::libs::error::{Entity, TrackerError, TrackerResult};
use crate::libs::user::User;
use crate::libs::validate::{validate_optional, validate_text};
use tracing::{debug, info};

impl Tracker {
    /// Registers a user. Nicknames and emails are unique.
    pub fn create_user(&self, nickname: &str, email: Option<&str>) -> TrackerResult<User> {
        let nickname = nickname.trim();
        let email = email.map(str::trim).filter(|e| !e.is_empty());
        validate_text("nickname", nickname)?;
        validate_optional("email", email)?;

        let user = self.write(|tx, now| {
            let users = Users::new(tx);
            if users.get_by_nickname(nickname)?.is_some() {
                return Err(TrackerError::InvalidArgument(format!("nickname '{}' is already registered", nickname)));
            }
            if let Some(email) = email {
                if users.get_by_email(email)?.is_some() {
                    return Err(TrackerError::InvalidArgument(format!("email '{}' is already registered", email)));
                }
            }
            let id = users.insert(nickname, email, &now)?;
            users.get_by_id(id)?.ok_or_else(|| TrackerError::not_found(Entity::User, id))
        })?;

        info!(user_id = user.id, nickname = %user.nickname, "User created");
        Ok(user)
    }

    pub fn get_user(&self, id: i64) -> TrackerResult<User> {
        self.read(|conn| Users::new(conn).get_by_id(id)?.ok_or_else(|| TrackerError::not_found(Entity::User, id)))
    }

    pub fn find_user_by_nickname(&self, nickname: &str) -> TrackerResult<User> {
        debug!(nickname, "Looking up user");
        self.read(|conn| {
            Users::new(conn)
                .get_by_nickname(nickname)?
                .ok_or_else(|| TrackerError::not_found(Entity::User, nickname))
        })
    }

    pub fn find_user_by_email(&self, email: &str) -> TrackerResult<User> {
        debug!(email, "Looking up user");
        self.read(|conn| {
            Users::new(conn)
                .get_by_email(email)?
                .ok_or_else(|| TrackerError::not_found(Entity::User, email))
        })
    }

    pub fn list_users(&self) -> TrackerResult<Vec<User>> {
        self.read(|conn| Ok(Users::new(conn).fetch_all()?))
    }

    /// Deletes a user together with all of their sessions, pomodoros and pauses.
    pub fn delete_user(&self, id: i64) -> TrackerResult<()> {
        self.write(|tx, _| {
            if Users::new(tx).delete(id)? == 0 {
                return Err(TrackerError::not_found(Entity::User, id));
            }
            Ok(())
        })?;

        info!(user_id = id, "User deleted");
        Ok(())
    }
}
