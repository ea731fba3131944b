#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use pomolog::libs::accounting::TimeUnit;
    use pomolog::libs::clock::ManualClock;
    use pomolog::libs::error::{Entity, TrackerError};
    use pomolog::libs::pomodoro::StartPomodoroRequest;
    use pomolog::libs::stats::UserStatistics;
    use pomolog::libs::tracker::Tracker;
    use std::sync::Arc;
    use test_context::{test_context, TestContext};

    struct StatsTestContext {
        clock: Arc<ManualClock>,
        tracker: Tracker,
    }

    impl TestContext for StatsTestContext {
        fn setup() -> Self {
            let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2025, 4, 7, 10, 0, 0).unwrap()));
            let tracker = Tracker::in_memory(clock.clone(), TimeUnit::Minutes).unwrap();
            StatsTestContext { clock, tracker }
        }
    }

    impl StatsTestContext {
        /// Runs one pomodoro to its end and returns the credited duration.
        fn run(&self, session_id: i64, event_kind: &str, minutes: i64, cancel: bool) -> i64 {
            let pomodoro = self
                .tracker
                .start_pomodoro(StartPomodoroRequest {
                    session_id,
                    rule_id: 2,
                    type_id: 1,
                    event_kind: event_kind.into(),
                    planned_duration: 25,
                    notes: None,
                })
                .unwrap();
            self.clock.advance(Duration::minutes(minutes));
            let done = if cancel {
                self.tracker.cancel_pomodoro(pomodoro.id)
            } else {
                self.tracker.complete_pomodoro(pomodoro.id)
            };
            done.unwrap().credited_duration.unwrap()
        }
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_user_without_sessions(ctx: &mut StatsTestContext) {
        let user = ctx.tracker.create_user("new_user", None).unwrap();

        let stats = ctx.tracker.user_statistics(user.id).unwrap();
        assert_eq!(
            stats,
            UserStatistics {
                user_id: user.id,
                ..UserStatistics::default()
            }
        );
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_unknown_user(ctx: &mut StatsTestContext) {
        assert!(matches!(
            ctx.tracker.user_statistics(12),
            Err(TrackerError::NotFound { entity: Entity::User, .. })
        ));
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_sums_over_all_sessions(ctx: &mut StatsTestContext) {
        let user = ctx.tracker.create_user("valentina", None).unwrap();
        let other = ctx.tracker.create_user("diego", None).unwrap();
        let morning = ctx.tracker.create_session(user.id, "Morning", None).unwrap();
        let evening = ctx.tracker.create_session(user.id, "Evening", None).unwrap();
        let foreign = ctx.tracker.create_session(other.id, "Elsewhere", None).unwrap();

        ctx.run(morning.id, "focus", 25, false);
        ctx.run(morning.id, "break", 5, false);
        ctx.run(evening.id, "focus", 15, true);
        ctx.run(evening.id, "focus", 20, false);
        ctx.run(foreign.id, "focus", 25, false);

        // still open: not counted
        ctx.tracker
            .start_pomodoro(StartPomodoroRequest {
                session_id: evening.id,
                rule_id: 2,
                type_id: 1,
                event_kind: "focus".into(),
                planned_duration: 25,
                notes: None,
            })
            .unwrap();
        ctx.tracker.credit_pause(evening.id, 4).unwrap();

        let stats = ctx.tracker.user_statistics(user.id).unwrap();
        assert_eq!(stats.focus_total, 25 + 15 + 20);
        assert_eq!(stats.break_total, 5);
        assert_eq!(stats.pause_total, 4);
        assert_eq!(stats.session_count, 2);
        assert_eq!(stats.completed_pomodoro_count, 3);

        let other_stats = ctx.tracker.user_statistics(other.id).unwrap();
        assert_eq!(other_stats.focus_total, 25);
        assert_eq!(other_stats.session_count, 1);
        assert_eq!(other_stats.completed_pomodoro_count, 1);
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_statistics_serialize_for_callers(ctx: &mut StatsTestContext) {
        let user = ctx.tracker.create_user("json_user", None).unwrap();
        let session = ctx.tracker.create_session(user.id, "Deep work", None).unwrap();
        ctx.tracker.credit_focus(session.id, 50).unwrap();

        let value = serde_json::to_value(ctx.tracker.user_statistics(user.id).unwrap()).unwrap();
        assert_eq!(value["focus_total"], 50);
        assert_eq!(value["session_count"], 1);
        assert_eq!(value["completed_pomodoro_count"], 0);
    }
}
