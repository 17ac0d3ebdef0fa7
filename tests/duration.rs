#[cfg(test)]
mod tests {
    use twlog::libs::duration::Duration;
    use twlog::libs::error::ParseError;

    #[test]
    fn test_parse_hours_and_minutes() {
        assert_eq!(Duration::parse("1:05").unwrap(), Duration { hours: 1, minutes: 5 });
        assert_eq!(Duration::parse("0:30").unwrap(), Duration { hours: 0, minutes: 30 });
        assert_eq!(Duration::parse(" 12:00 ").unwrap(), Duration { hours: 12, minutes: 0 });
    }

    #[test]
    fn test_parse_preserves_total_minutes() {
        for hours in [0u32, 1, 7, 23, 150] {
            for minutes in [0u32, 1, 9, 30, 59] {
                let raw = format!("{}:{:02}", hours, minutes);
                let duration = Duration::parse(&raw).unwrap();
                assert_eq!(duration.total_minutes(), u64::from(hours * 60 + minutes), "{raw}");
            }
        }
    }

    #[test]
    fn test_parse_bare_minutes() {
        assert_eq!(Duration::parse("45").unwrap(), Duration { hours: 0, minutes: 45 });
        assert_eq!(Duration::parse("90").unwrap(), Duration { hours: 1, minutes: 30 });
        assert_eq!(Duration::parse("120").unwrap(), Duration { hours: 2, minutes: 0 });
        assert_eq!(Duration::parse("0").unwrap(), Duration::default());
    }

    #[test]
    fn test_parse_carries_minutes_after_separator() {
        assert_eq!(Duration::parse("1:75").unwrap(), Duration { hours: 2, minutes: 15 });
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        for raw in ["", "abc", "1:xx", "x:30", "-5", "1:-5", "1.5", "1:30:00"] {
            assert_eq!(Duration::parse(raw), Err(ParseError::InvalidDuration(raw.to_string())), "{raw}");
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut duration = Duration::new(3, 125).unwrap();
        assert_eq!(duration, Duration { hours: 5, minutes: 5 });

        let before = duration;
        duration.normalize().unwrap();
        assert_eq!(duration, before);
    }

    #[test]
    fn test_add_carries_into_hours() {
        let mut total = Duration::parse("0:30").unwrap();
        total.add(Duration::parse("0:45").unwrap()).unwrap();
        assert_eq!(total, Duration { hours: 1, minutes: 15 });
    }

    #[test]
    fn test_merge_order_does_not_change_total() {
        let a = Duration::parse("1:50").unwrap();
        let b = Duration::parse("0:25").unwrap();
        let c = Duration::parse("95").unwrap();

        let mut left = a;
        left.add(b).unwrap();
        left.add(c).unwrap();

        let mut right_tail = b;
        right_tail.add(c).unwrap();
        let mut right = a;
        right.add(right_tail).unwrap();

        let mut reversed = c;
        reversed.add(b).unwrap();
        reversed.add(a).unwrap();

        assert_eq!(left.total_minutes(), right.total_minutes());
        assert_eq!(left, reversed);
        assert_eq!(left, Duration { hours: 3, minutes: 50 });
    }

    #[test]
    fn test_display() {
        assert_eq!(Duration::new(1, 5).unwrap().to_string(), "1:05");
        assert_eq!(Duration::new(0, 90).unwrap().to_string(), "1:30");
    }

    #[test]
    fn test_parse_rejects_hours_overflowing_on_carry() {
        let raw = format!("{}:60", u32::MAX);
        assert_eq!(Duration::parse(&raw), Err(ParseError::InvalidDuration(raw.clone())));
        assert!(Duration::new(u32::MAX, 120).is_err());

        let largest = format!("{}:59", u32::MAX);
        assert_eq!(Duration::parse(&largest).unwrap(), Duration { hours: u32::MAX, minutes: 59 });
    }

    #[test]
    fn test_add_rejects_overflowing_total() {
        let mut total = Duration::parse(&format!("{}:00", u32::MAX)).unwrap();
        let before = total;

        let error = total.add(Duration::parse("1:00").unwrap()).unwrap_err();
        assert!(matches!(error, ParseError::InvalidDuration(_)));
        assert_eq!(total, before);

        let mut almost = Duration::parse(&format!("{}:30", u32::MAX)).unwrap();
        assert!(almost.add(Duration::parse("0:30").unwrap()).is_err());
        assert!(almost.add(Duration::parse("0:29").unwrap()).is_ok());
        assert_eq!(almost, Duration { hours: u32::MAX, minutes: 59 });
    }
}
