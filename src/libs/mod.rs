pub mod accounting;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod pause;
pub mod policy;
pub mod pomodoro;
pub mod session;
pub mod stats;
pub mod tracker;
pub mod user;
pub mod validate;
pub mod view;
