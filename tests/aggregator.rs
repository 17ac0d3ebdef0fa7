#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use twlog::libs::aggregator::{Aggregated, Aggregator, DateRange, EntryKey};
    use twlog::libs::config::Config;
    use twlog::libs::duration::Duration;
    use twlog::libs::error::{ParseError, TwLogError, ValidationError};
    use twlog::libs::row::{parse_date, RawRow};

    fn config() -> Config {
        serde_json::from_value(serde_json::json!({
            "company": "acme",
            "key": "secret",
            "personId": "77",
            "map": {
                "project": {
                    "Acme": 1001,
                    "Website": {"id": 2002, "task": {"Development": 31337}}
                }
            }
        }))
        .unwrap()
    }

    fn row(project: &str, task: &str, notes: &str, date: &str, time: &str) -> RawRow {
        RawRow::from([("Project", project), ("Task", task), ("Notes", notes), ("Date", date), ("Duration", time)])
    }

    fn key(project: &str, description: &str, date: &str) -> EntryKey {
        EntryKey {
            project: project.to_string(),
            description: description.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_identical_rows_merge_with_carry() {
        let config = config();
        let mut aggregator = Aggregator::new(&config);

        let first = aggregator.aggregate(&row("Acme", "", "standup", "2024-01-01", "0:30")).unwrap();
        let second = aggregator.aggregate(&row("Acme", "", "standup", "2024-01-01", "0:45")).unwrap();

        assert_eq!(first, Aggregated::Created);
        assert_eq!(second, Aggregated::Merged);
        assert_eq!(aggregator.len(), 1);

        let entry = aggregator.get(&key("Acme", "standup", "20240101")).unwrap();
        assert_eq!(entry.duration, Duration { hours: 1, minutes: 15 });
        assert_eq!(entry.project_id, "1001");
        assert_eq!(entry.person_id, "77");
        assert!(entry.is_billable);
        assert_eq!(entry.task_id, None);
        assert_eq!(entry.key(), key("Acme", "standup", "20240101"));
    }

    #[test]
    fn test_bare_minutes_merge_with_hours_and_minutes() {
        let config = config();
        let mut aggregator = Aggregator::new(&config);

        aggregator.aggregate(&row("Acme", "", "review", "2024-01-01", "90")).unwrap();
        aggregator.aggregate(&row("Acme", "", "review", "2024-01-01", "1:45")).unwrap();

        let entry = aggregator.get(&key("Acme", "review", "20240101")).unwrap();
        assert_eq!(entry.duration, Duration { hours: 3, minutes: 15 });
    }

    #[test]
    fn test_merge_order_does_not_change_total() {
        let config = config();
        let times = ["0:50", "35", "1:40"];
        let orders = [[0, 1, 2], [2, 1, 0], [1, 2, 0]];

        let totals: Vec<Duration> = orders
            .iter()
            .map(|order| {
                let mut aggregator = Aggregator::new(&config);
                for index in order {
                    aggregator.aggregate(&row("Acme", "", "work", "2024-03-05", times[*index])).unwrap();
                }
                aggregator.get(&key("Acme", "work", "20240305")).unwrap().duration
            })
            .collect();

        assert!(totals.iter().all(|total| *total == Duration { hours: 3, minutes: 5 }));
    }

    #[test]
    fn test_key_components_keep_entries_apart() {
        let config = config();
        let mut aggregator = Aggregator::new(&config);

        aggregator.aggregate(&row("Acme", "", "standup", "2024-01-01", "0:15")).unwrap();
        aggregator.aggregate(&row("Acme", "", "standup", "2024-01-02", "0:15")).unwrap();
        aggregator.aggregate(&row("Acme", "", "retro", "2024-01-01", "0:15")).unwrap();
        aggregator.aggregate(&row("Website", "", "standup", "2024-01-01", "0:15")).unwrap();
        // differs only by an embedded task reference
        aggregator.aggregate(&row("Acme", "", "123 - standup", "2024-01-01", "0:15")).unwrap();

        assert_eq!(aggregator.len(), 5);
    }

    #[test]
    fn test_date_formats_share_one_key() {
        let config = config();
        let mut aggregator = Aggregator::new(&config);

        aggregator.aggregate(&row("Acme", "", "standup", "2024-01-05", "0:10")).unwrap();
        aggregator.aggregate(&row("Acme", "", "standup", "01/05/2024", "0:10")).unwrap();
        aggregator.aggregate(&row("Acme", "", "standup", "2024-01-05 09:30:00", "0:10")).unwrap();

        assert_eq!(aggregator.len(), 1);
        assert_eq!(aggregator.get(&key("Acme", "standup", "20240105")).unwrap().duration.minutes, 30);
    }

    #[test]
    fn test_configured_task_resolves_task_id() {
        let config = config();
        let mut aggregator = Aggregator::new(&config);

        aggregator.aggregate(&row("Website", "Development", "header", "2024-02-01", "2:00")).unwrap();
        aggregator.aggregate(&row("Website", "Design", "", "2024-02-01", "1:00")).unwrap();

        let development = aggregator.get(&key("Website", "Development: header", "20240201")).unwrap();
        assert_eq!(development.task_id.as_deref(), Some("31337"));
        assert_eq!(development.task.as_deref(), Some("Development"));

        let design = aggregator.get(&key("Website", "Design", "20240201")).unwrap();
        assert_eq!(design.task_id, None);
    }

    #[test]
    fn test_merge_keeps_identity_fields() {
        let config = config();
        let mut aggregator = Aggregator::new(&config);

        aggregator.aggregate(&row("Website", "Development", "", "2024-02-01", "0:20")).unwrap();
        let before = aggregator.get(&key("Website", "Development", "20240201")).unwrap().clone();
        aggregator.aggregate(&row("Website", "Development", "", "2024-02-01", "0:50")).unwrap();
        let after = aggregator.get(&key("Website", "Development", "20240201")).unwrap();

        assert_eq!(after.task_id, before.task_id);
        assert_eq!(after.description, before.description);
        assert_eq!(after.project_id, before.project_id);
        assert_eq!(after.duration, Duration { hours: 1, minutes: 10 });
    }

    #[test]
    fn test_task_column_is_optional() {
        let config = config();
        let mut aggregator = Aggregator::new(&config);
        let row = RawRow::from([("Project", "Acme"), ("Notes", "email"), ("Date", "2024-01-01"), ("Duration", "5")]);

        assert_eq!(aggregator.aggregate(&row).unwrap(), Aggregated::Created);
        assert!(aggregator.get(&key("Acme", "email", "20240101")).is_some());
    }

    #[test]
    fn test_unknown_project_is_rejected() {
        let config = config();
        let mut aggregator = Aggregator::new(&config);

        let error = aggregator.aggregate(&row("Globex", "", "standup", "2024-01-01", "0:30")).unwrap_err();
        assert!(matches!(error, TwLogError::Validation(ValidationError::UnknownProject(ref name)) if name == "Globex"));
        assert_eq!(error.exit_code(), 3);
        assert!(aggregator.is_empty());
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let config = config();
        let mut aggregator = Aggregator::new(&config);
        let row = RawRow::from([("Project", "Acme"), ("Date", "2024-01-01"), ("Duration", "0:30")]);

        let error = aggregator.aggregate(&row).unwrap_err();
        assert!(matches!(
            error,
            TwLogError::Validation(ValidationError::MissingColumn { field: "notes", .. })
        ));
    }

    #[test]
    fn test_invalid_values_are_parse_errors() {
        let config = config();
        let mut aggregator = Aggregator::new(&config);

        let error = aggregator.aggregate(&row("Acme", "", "standup", "2024-01-01", "half an hour")).unwrap_err();
        assert!(matches!(error, TwLogError::Parse(ParseError::InvalidDuration(_))));
        assert_eq!(error.exit_code(), 4);

        let error = aggregator.aggregate(&row("Acme", "", "standup", "someday", "0:30")).unwrap_err();
        assert!(matches!(error, TwLogError::Parse(ParseError::InvalidDate(_))));
        assert!(aggregator.is_empty());
    }

    #[test]
    fn test_merge_overflowing_total_is_a_parse_error() {
        let config = config();
        let mut aggregator = Aggregator::new(&config);
        let huge = format!("{}:00", u32::MAX);

        aggregator.aggregate(&row("Acme", "", "standup", "2024-01-01", &huge)).unwrap();
        let error = aggregator.aggregate(&row("Acme", "", "standup", "2024-01-01", "1:00")).unwrap_err();

        assert!(matches!(error, TwLogError::Parse(ParseError::InvalidDuration(_))));
        assert_eq!(error.exit_code(), 4);
        let entry = aggregator.get(&key("Acme", "standup", "20240101")).unwrap();
        assert_eq!(entry.duration, Duration { hours: u32::MAX, minutes: 0 });
    }

    #[test]
    fn test_date_range_skips_rows_outside() {
        let config = config();
        let range = DateRange::new(NaiveDate::from_ymd_opt(2024, 1, 2), NaiveDate::from_ymd_opt(2024, 1, 3));
        let mut aggregator = Aggregator::new(&config).with_range(range);

        assert_eq!(aggregator.aggregate(&row("Acme", "", "a", "2024-01-01", "0:10")).unwrap(), Aggregated::Skipped);
        assert_eq!(aggregator.aggregate(&row("Acme", "", "a", "2024-01-02", "0:10")).unwrap(), Aggregated::Created);
        assert_eq!(aggregator.aggregate(&row("Acme", "", "a", "2024-01-03", "0:10")).unwrap(), Aggregated::Created);
        assert_eq!(aggregator.aggregate(&row("Acme", "", "a", "2024-01-04", "0:10")).unwrap(), Aggregated::Skipped);
        assert_eq!(aggregator.len(), 2);

        // still validated when out of range
        assert!(aggregator.aggregate(&row("Globex", "", "a", "2023-12-31", "0:10")).is_err());
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        for raw in ["2024-03-09", "2024/03/09", "03/09/2024", "09.03.2024", "20240309", "Mar 9, 2024", "2024-03-09T17:45:00+01:00", "2024-03-09 08:15"] {
            assert_eq!(parse_date(raw).unwrap(), expected, "{raw}");
        }
    }
}
