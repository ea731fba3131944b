//! Every user-facing message the application prints.
//!
//! Text lives in [`super::display`]; call sites only pick a variant and
//! hand it to one of the `msg_*!` macros.

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigWizardHeader,
    ConfigSaved,
    ConfigDeleted,
    PromptDatabasePath,
    PromptTimeUnit,
    PromptBusyTimeout,

    // === USER MESSAGES ===
    UserCreated(i64, String), // id, nickname
    UserDeleted(i64),
    UsersTitle,
    NoUsersFound,
    UserLookupNeedsKey,

    // === SESSION MESSAGES ===
    SessionCreated(i64, String), // id, name
    SessionsTitle(i64),          // user id
    NoSessionsForUser(i64),
    SessionCredited {
        session_id: i64,
        kind: String,
        amount: i64,
        total: String,
    },
    NegativeCredit(i64),

    // === POMODORO MESSAGES ===
    PomodoroStarted {
        id: i64,
        event_kind: String,
        planned: String,
    },
    PomodoroCompleted {
        id: i64,
        credited: String,
    },
    PomodoroCancelled {
        id: i64,
        credited: String,
    },
    PomodorosTitle(i64), // session id
    NoPomodorosForSession(i64),

    // === PAUSE MESSAGES ===
    PauseStarted(i64, i64), // pause id, pomodoro id
    PauseFinalized {
        id: i64,
        credited: String,
    },
    PausesTitle(i64), // pomodoro id
    NoPausesForPomodoro(i64),

    // === REFERENCE DATA MESSAGES ===
    RulesTitle,
    TypesTitle,

    // === STATISTICS MESSAGES ===
    StatisticsTitle(String), // nickname

    // === ERROR MESSAGES ===
    CommandFailed(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NoMigrationsApplied,
}
