//! Display implementation for application messages.
//!
//! All message text is defined here so wording stays consistent between
//! commands, and parameters are interpolated with their types checked at
//! compile time.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigWizardHeader => "Pomolog configuration".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults apply again".to_string(),
            Message::PromptDatabasePath => "Database file".to_string(),
            Message::PromptTimeUnit => "Unit for planned and credited durations".to_string(),
            Message::PromptBusyTimeout => "Write lock wait (milliseconds)".to_string(),

            // === USER MESSAGES ===
            Message::UserCreated(id, nickname) => format!("User '{}' created with ID {}", nickname, id),
            Message::UserDeleted(id) => format!("User {} and all of their sessions deleted", id),
            Message::UsersTitle => "Users".to_string(),
            Message::NoUsersFound => "No users found.".to_string(),
            Message::UserLookupNeedsKey => "Provide --nickname or --email to look a user up.".to_string(),

            // === SESSION MESSAGES ===
            Message::SessionCreated(id, name) => format!("Session '{}' created with ID {}", name, id),
            Message::SessionsTitle(user_id) => format!("Sessions of user {}", user_id),
            Message::NoSessionsForUser(user_id) => format!("User {} has no sessions yet.", user_id),
            Message::SessionCredited {
                session_id,
                kind,
                amount,
                total,
            } => format!("Added {} to the {} total of session {} (now {})", amount, kind, session_id, total),
            Message::NegativeCredit(amount) => format!("Credit amount must not be negative, got {}", amount),

            // === POMODORO MESSAGES ===
            Message::PomodoroStarted { id, event_kind, planned } => {
                format!("Pomodoro {} started: {} for {}", id, event_kind, planned)
            }
            Message::PomodoroCompleted { id, credited } => format!("Pomodoro {} completed, credited {}", id, credited),
            Message::PomodoroCancelled { id, credited } => format!("Pomodoro {} cancelled, credited {}", id, credited),
            Message::PomodorosTitle(session_id) => format!("Pomodoros of session {}", session_id),
            Message::NoPomodorosForSession(session_id) => format!("Session {} has no pomodoros yet.", session_id),

            // === PAUSE MESSAGES ===
            Message::PauseStarted(id, pomodoro_id) => format!("Pause {} started on pomodoro {}", id, pomodoro_id),
            Message::PauseFinalized { id, credited } => format!("Pause {} finalized, credited {}", id, credited),
            Message::PausesTitle(pomodoro_id) => format!("Pauses of pomodoro {}", pomodoro_id),
            Message::NoPausesForPomodoro(pomodoro_id) => format!("Pomodoro {} has no pauses.", pomodoro_id),

            // === REFERENCE DATA MESSAGES ===
            Message::RulesTitle => "Duration rules".to_string(),
            Message::TypesTitle => "Pomodoro types".to_string(),

            // === STATISTICS MESSAGES ===
            Message::StatisticsTitle(nickname) => format!("Statistics for {}", nickname),

            // === ERROR MESSAGES ===
            Message::CommandFailed(error) => error.to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NoMigrationsApplied => "No migrations have been applied to this database yet".to_string(),
        };

        write!(f, "{}", text)
    }
}
