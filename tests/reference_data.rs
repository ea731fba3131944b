#[cfg(test)]
mod tests {
    use pomolog::libs::accounting::TimeUnit;
    use pomolog::libs::clock::SystemClock;
    use pomolog::libs::error::{Entity, TrackerError};
    use pomolog::libs::tracker::Tracker;
    use std::sync::Arc;

    fn tracker() -> Tracker {
        Tracker::in_memory(Arc::new(SystemClock), TimeUnit::Minutes).unwrap()
    }

    #[test]
    fn test_seeded_rules() {
        let tracker = tracker();
        let rules = tracker.list_rules().unwrap();

        let presets: Vec<_> = rules
            .iter()
            .map(|r| (r.name.as_str(), r.focus_duration, r.break_duration))
            .collect();
        assert_eq!(
            presets,
            vec![
                ("Baby Step", 10, 5),
                ("Popular", 25, 5),
                ("Medium", 40, 8),
                ("Intense", 50, 10),
                ("Extended", 90, 15),
            ]
        );
        assert_eq!(tracker.get_rule(rules[1].id).unwrap(), rules[1]);
    }

    #[test]
    fn test_rule_lookup_by_name() {
        let tracker = tracker();
        assert_eq!(tracker.find_rule("popular").unwrap().focus_duration, 25);
        assert_eq!(tracker.find_rule("EXTENDED").unwrap().break_duration, 15);
        assert!(matches!(
            tracker.find_rule("Marathon"),
            Err(TrackerError::NotFound { entity: Entity::Rule, .. })
        ));
        assert!(tracker.get_rule(99).is_err());
    }

    #[test]
    fn test_seeded_types() {
        let tracker = tracker();
        let names: Vec<_> = tracker.list_types().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Study", "Work", "Reading", "Active Break"]);

        assert_eq!(tracker.get_type(1).unwrap().name, "Study");
        let err = tracker.get_type(9).unwrap_err();
        assert!(matches!(err, TrackerError::NotFound { entity: Entity::Type, .. }));
    }
}
