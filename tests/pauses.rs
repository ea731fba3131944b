#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use pomolog::libs::accounting::TimeUnit;
    use pomolog::libs::clock::{Clock, ManualClock};
    use pomolog::libs::error::{Entity, TrackerError};
    use pomolog::libs::pomodoro::{Pomodoro, StartPomodoroRequest};
    use pomolog::libs::tracker::Tracker;
    use std::sync::Arc;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct PauseTestContext {
        _temp_dir: TempDir,
        clock: Arc<ManualClock>,
        tracker: Tracker,
        session_id: i64,
    }

    impl TestContext for PauseTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 14, 0, 0).unwrap()));
            let tracker = Tracker::open(temp_dir.path().join("pomolog.db"), clock.clone(), TimeUnit::Minutes).unwrap();
            let user = tracker.create_user("lucia", Some("lucia@example.com")).unwrap();
            let session = tracker.create_session(user.id, "Thesis", None).unwrap();

            PauseTestContext {
                _temp_dir: temp_dir,
                clock,
                tracker,
                session_id: session.id,
            }
        }
    }

    impl PauseTestContext {
        fn start_focus(&self) -> Pomodoro {
            self.tracker
                .start_pomodoro(StartPomodoroRequest {
                    session_id: self.session_id,
                    rule_id: 2,
                    type_id: 2,
                    event_kind: "focus".into(),
                    planned_duration: 25,
                    notes: None,
                })
                .unwrap()
        }

        fn pause_total(&self) -> i64 {
            self.tracker.get_session(self.session_id).unwrap().total_pause
        }
    }

    #[test_context(PauseTestContext)]
    #[test]
    fn test_immediate_finalize_credits_one_unit(ctx: &mut PauseTestContext) {
        let pomodoro = ctx.start_focus();
        let pause = ctx.tracker.start_pause(pomodoro.id).unwrap();
        assert!(!pause.is_finalized());
        assert_eq!(pause.started_at, ctx.clock.now());
        assert_eq!(pause.credited_duration, 0);

        let finalized = ctx.tracker.finalize_pause(pause.id).unwrap();
        assert!(finalized.is_finalized());
        assert_eq!(finalized.credited_duration, 1);
        assert_eq!(ctx.pause_total(), 1);

        let err = ctx.tracker.finalize_pause(pause.id).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidState { entity: Entity::Pause, .. }));
        assert_eq!(err.to_string(), format!("Pause {} is already finalized", pause.id));
        assert_eq!(ctx.pause_total(), 1);
    }

    #[test_context(PauseTestContext)]
    #[test]
    fn test_pause_has_no_upper_bound(ctx: &mut PauseTestContext) {
        let pomodoro = ctx.start_focus();
        let pause = ctx.tracker.start_pause(pomodoro.id).unwrap();
        ctx.clock.advance(Duration::minutes(45));

        let finalized = ctx.tracker.finalize_pause(pause.id).unwrap();
        assert_eq!(finalized.credited_duration, 45);
        assert_eq!(finalized.ended_at, Some(ctx.clock.now()));
        assert_eq!(ctx.pause_total(), 45);

        // the pomodoro itself is not affected
        assert!(ctx.tracker.get_pomodoro(pomodoro.id).unwrap().is_open());
    }

    #[test_context(PauseTestContext)]
    #[test]
    fn test_pauses_accumulate(ctx: &mut PauseTestContext) {
        let pomodoro = ctx.start_focus();
        let mut expected = 0;
        for minutes in [3, 7, 2] {
            let pause = ctx.tracker.start_pause(pomodoro.id).unwrap();
            ctx.clock.advance(Duration::minutes(minutes));
            expected += ctx.tracker.finalize_pause(pause.id).unwrap().credited_duration;
        }

        assert_eq!(expected, 12);
        assert_eq!(ctx.pause_total(), 12);
        assert_eq!(ctx.tracker.list_pauses(pomodoro.id).unwrap().len(), 3);
    }

    #[test_context(PauseTestContext)]
    #[test]
    fn test_pause_on_finished_pomodoro_is_allowed(ctx: &mut PauseTestContext) {
        let pomodoro = ctx.start_focus();
        ctx.clock.advance(Duration::minutes(20));
        ctx.tracker.complete_pomodoro(pomodoro.id).unwrap();

        let pause = ctx.tracker.start_pause(pomodoro.id).unwrap();
        ctx.clock.advance(Duration::minutes(4));
        let finalized = ctx.tracker.finalize_pause(pause.id).unwrap();

        assert_eq!(finalized.credited_duration, 4);
        let session = ctx.tracker.get_session(ctx.session_id).unwrap();
        assert_eq!(session.total_focus, 20);
        assert_eq!(session.total_pause, 4);
    }

    #[test_context(PauseTestContext)]
    #[test]
    fn test_open_pause_survives_pomodoro_completion(ctx: &mut PauseTestContext) {
        let pomodoro = ctx.start_focus();
        let pause = ctx.tracker.start_pause(pomodoro.id).unwrap();
        ctx.clock.advance(Duration::minutes(6));
        ctx.tracker.cancel_pomodoro(pomodoro.id).unwrap();

        ctx.clock.advance(Duration::minutes(2));
        assert_eq!(ctx.tracker.finalize_pause(pause.id).unwrap().credited_duration, 8);
    }

    #[test_context(PauseTestContext)]
    #[test]
    fn test_unknown_records(ctx: &mut PauseTestContext) {
        assert!(matches!(
            ctx.tracker.start_pause(77),
            Err(TrackerError::NotFound { entity: Entity::Pomodoro, .. })
        ));
        assert!(matches!(
            ctx.tracker.finalize_pause(77),
            Err(TrackerError::NotFound { entity: Entity::Pause, .. })
        ));
        assert!(ctx.tracker.get_pause(77).is_err());
        assert!(ctx.tracker.list_pauses(77).unwrap().is_empty());
        assert_eq!(ctx.pause_total(), 0);
    }

    #[test_context(PauseTestContext)]
    #[test]
    fn test_list_pauses_in_order(ctx: &mut PauseTestContext) {
        let pomodoro = ctx.start_focus();
        assert!(ctx.tracker.list_pauses(pomodoro.id).unwrap().is_empty());

        let first = ctx.tracker.start_pause(pomodoro.id).unwrap();
        ctx.tracker.finalize_pause(first.id).unwrap();
        let second = ctx.tracker.start_pause(pomodoro.id).unwrap();

        let pauses = ctx.tracker.list_pauses(pomodoro.id).unwrap();
        assert_eq!(pauses.iter().map(|p| p.id).collect::<Vec<_>>(), vec![first.id, second.id]);
        assert!(pauses[0].is_finalized());
        assert!(!pauses[1].is_finalized());
        assert_eq!(ctx.tracker.get_pause(second.id).unwrap(), pauses[1]);
    }
}
