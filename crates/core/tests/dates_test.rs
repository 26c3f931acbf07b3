use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use schedseed_core::dates::{DateRange, enumerate, parse_date};
use schedseed_core::errors::SeedError;

#[test]
fn test_single_day() {
    assert_eq!(enumerate("2025-05-01", "2025-05-01").unwrap(), vec!["2025-05-01"]);
}

#[test]
fn test_crosses_month_and_leap_day() {
    let days = enumerate("2024-02-27", "2024-03-02").unwrap();

    assert_eq!(
        days,
        vec![
            "2024-02-27",
            "2024-02-28",
            "2024-02-29",
            "2024-03-01",
            "2024-03-02",
        ]
    );
}

#[rstest]
#[case("2025-05-01", "2025-08-31", 123)]
#[case("2025-12-30", "2026-01-02", 4)]
#[case("2023-01-01", "2023-12-31", 365)]
#[case("2024-01-01", "2024-12-31", 366)]
fn test_length_matches_day_difference(#[case] start: &str, #[case] end: &str, #[case] expected: usize) {
    let range = DateRange::parse(start, end).unwrap();
    let days: Vec<NaiveDate> = range.days().collect();

    assert_eq!(days.len(), expected);
    assert_eq!(range.len(), expected);
    assert_eq!(days.first(), Some(&range.start));
    assert_eq!(days.last(), Some(&range.end));
    assert!(days.windows(2).all(|w| w[0].succ_opt() == Some(w[1])));
}

#[rstest]
#[case("2025-05-02", "2025-05-01")]
#[case("2026-01-01", "2025-12-31")]
fn test_inverted_range_is_empty(#[case] start: &str, #[case] end: &str) {
    let range = DateRange::parse(start, end).unwrap();

    assert!(range.is_empty());
    assert_eq!(range.len(), 0);
    assert_eq!(range.days().count(), 0);
    assert!(enumerate(start, end).unwrap().is_empty());
}

#[test]
fn test_range_ending_on_max_date() {
    let range = DateRange::new(NaiveDate::MAX.pred_opt().unwrap(), NaiveDate::MAX);

    assert_eq!(range.days().count(), 2);
}

#[rstest]
#[case("2025/05/01")]
#[case("2025-02-30")]
#[case("May 1st")]
#[case("")]
fn test_malformed_dates_fail(#[case] input: &str) {
    assert!(matches!(parse_date(input), Err(SeedError::Parse { .. })));
    assert!(matches!(enumerate(input, "2025-05-01"), Err(SeedError::Parse { .. })));
    assert!(matches!(enumerate("2025-05-01", input), Err(SeedError::Parse { .. })));
}
