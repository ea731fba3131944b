//! # Pomolog - Pomodoro session tracking
//!
//! Records Pomodoro-technique work: users, sessions, timed focus and break
//! intervals, nested pauses, and the per-session totals they accumulate.
//!
//! ## Features
//!
//! - **Pomodoro lifecycle**: start, complete or cancel, with credited time
//!   clamped to the planned duration
//! - **Pauses**: suspensions inside a pomodoro, credited to the session's pause total
//! - **Session totals**: focus, break and pause time, updated atomically
//! - **Statistics**: per-user sums over all sessions
//! - **Reference data**: seeded duration rules and pomodoro types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomolog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
