use super::accounting::TimeUnit;
use super::formatter::{format_optional_timestamp, format_optional_units, format_timestamp, format_units};
use super::pause::Pause;
use super::policy::{DurationRule, PomodoroType};
use super::pomodoro::Pomodoro;
use super::session::Session;
use super::stats::UserStatistics;
use super::user::User;
use crate::db::migrations::AppliedMigration;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn users(users: &[User]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NICKNAME", "EMAIL", "CREATED"]);
        for user in users {
            table.add_row(row![
                user.id,
                user.nickname,
                user.email.as_deref().unwrap_or("-"),
                format_timestamp(&user.created_at)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn sessions(sessions: &[Session], unit: TimeUnit) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "USER", "NAME", "CREATED", "FOCUS", "BREAK", "PAUSE"]);
        for session in sessions {
            table.add_row(row![
                session.id,
                session.user_id,
                session.name,
                format_timestamp(&session.created_at),
                format_units(session.total_focus, unit),
                format_units(session.total_break, unit),
                format_units(session.total_pause, unit)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn pomodoros(pomodoros: &[Pomodoro], unit: TimeUnit) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "KIND", "STATE", "PLANNED", "CREDITED", "STARTED", "ENDED", "NOTES"]);
        for pomodoro in pomodoros {
            table.add_row(row![
                pomodoro.id,
                pomodoro.event_kind,
                pomodoro.state,
                format_units(pomodoro.planned_duration, unit),
                format_optional_units(pomodoro.credited_duration, unit),
                format_timestamp(&pomodoro.started_at),
                format_optional_timestamp(&pomodoro.ended_at),
                pomodoro.notes.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn pauses(pauses: &[Pause], unit: TimeUnit) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "POMODORO", "STARTED", "ENDED", "CREDITED"]);
        for pause in pauses {
            let credited = pause.is_finalized().then_some(pause.credited_duration);
            table.add_row(row![
                pause.id,
                pause.pomodoro_id,
                format_timestamp(&pause.started_at),
                format_optional_timestamp(&pause.ended_at),
                format_optional_units(credited, unit)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn rules(rules: &[DurationRule]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "FOCUS", "BREAK", "DESCRIPTION"]);
        for rule in rules {
            table.add_row(row![
                rule.id,
                rule.name,
                rule.focus_duration,
                rule.break_duration,
                rule.description.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn types(types: &[PomodoroType]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for pomodoro_type in types {
            table.add_row(row![pomodoro_type.id, pomodoro_type.name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn statistics(stats: &UserStatistics, unit: TimeUnit) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SESSIONS", "COMPLETED", "FOCUS", "BREAK", "PAUSE"]);
        table.add_row(row![
            stats.session_count,
            stats.completed_pomodoro_count,
            format_units(stats.focus_total, unit),
            format_units(stats.break_total, unit),
            format_units(stats.pause_total, unit)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn migrations(history: &[AppliedMigration]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["VERSION", "NAME", "APPLIED"]);
        for migration in history {
            table.add_row(row![format!("v{}", migration.version), migration.name, migration.applied_at]);
        }
        table.printstd();

        Ok(())
    }
}
