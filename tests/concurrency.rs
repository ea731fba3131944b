#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pomolog::libs::accounting::TimeUnit;
    use pomolog::libs::clock::{Clock, ManualClock, SystemClock};
    use pomolog::libs::error::TrackerError;
    use pomolog::libs::pomodoro::StartPomodoroRequest;
    use pomolog::libs::tracker::Tracker;
    use std::path::PathBuf;
    use std::sync::{Arc, Barrier};
    use std::thread;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const THREADS: usize = 8;
    const CREDITS_PER_THREAD: usize = 25;

    struct ConcurrencyTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
        tracker: Tracker,
        session_id: i64,
    }

    impl TestContext for ConcurrencyTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("pomolog.db");
            let tracker = Tracker::open(&db_path, Arc::new(SystemClock), TimeUnit::Minutes).unwrap();
            let user = tracker.create_user("shared", None).unwrap();
            let session = tracker.create_session(user.id, "Shared session", None).unwrap();

            ConcurrencyTestContext {
                _temp_dir: temp_dir,
                db_path,
                tracker,
                session_id: session.id,
            }
        }
    }

    #[test_context(ConcurrencyTestContext)]
    #[test]
    fn test_concurrent_credits_on_one_tracker(ctx: &mut ConcurrencyTestContext) {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let tracker = ctx.tracker.clone();
                let session_id = ctx.session_id;
                thread::spawn(move || {
                    for _ in 0..CREDITS_PER_THREAD {
                        tracker.credit_focus(session_id, 1).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let session = ctx.tracker.get_session(ctx.session_id).unwrap();
        assert_eq!(session.total_focus, (THREADS * CREDITS_PER_THREAD) as i64);
    }

    #[test_context(ConcurrencyTestContext)]
    #[test]
    fn test_concurrent_credits_across_connections(ctx: &mut ConcurrencyTestContext) {
        let barrier = Arc::new(Barrier::new(THREADS));
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let tracker = Tracker::open(&ctx.db_path, Arc::new(SystemClock), TimeUnit::Minutes).unwrap();
                let barrier = barrier.clone();
                let session_id = ctx.session_id;
                thread::spawn(move || {
                    barrier.wait();
                    for _ in 0..CREDITS_PER_THREAD {
                        tracker.credit_pause(session_id, 1).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let session = ctx.tracker.get_session(ctx.session_id).unwrap();
        assert_eq!(session.total_pause, (THREADS * CREDITS_PER_THREAD) as i64);
    }

    #[test_context(ConcurrencyTestContext)]
    #[test]
    fn test_racing_completions_credit_once(ctx: &mut ConcurrencyTestContext) {
        let pomodoro = ctx
            .tracker
            .start_pomodoro(StartPomodoroRequest {
                session_id: ctx.session_id,
                rule_id: 2,
                type_id: 1,
                event_kind: "focus".into(),
                planned_duration: 25,
                notes: None,
            })
            .unwrap();

        let barrier = Arc::new(Barrier::new(THREADS));
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let tracker = Tracker::open(&ctx.db_path, Arc::new(SystemClock), TimeUnit::Minutes).unwrap();
                let barrier = barrier.clone();
                let id = pomodoro.id;
                thread::spawn(move || {
                    barrier.wait();
                    if i % 2 == 0 {
                        tracker.complete_pomodoro(id)
                    } else {
                        tracker.cancel_pomodoro(id)
                    }
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winners: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert_eq!(winners.len(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, TrackerError::InvalidState { .. })));

        let session = ctx.tracker.get_session(ctx.session_id).unwrap();
        assert_eq!(Some(session.total_focus), winners[0].credited_duration);
        assert_eq!(session.total_focus, 1);
    }

    #[tokio::test]
    async fn test_credits_from_blocking_tasks() {
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()));
        let temp_dir = tempfile::tempdir().unwrap();
        let tracker = Tracker::open(temp_dir.path().join("pomolog.db"), clock, TimeUnit::Seconds).unwrap();
        let user = tracker.create_user("async_user", None).unwrap();
        let session = tracker.create_session(user.id, "Async", None).unwrap();

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let tracker = tracker.clone();
                tokio::task::spawn_blocking(move || tracker.credit_break(session.id, 2))
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(tracker.get_session(session.id).unwrap().total_break, 32);
    }
}
