// Unit tests for the Alarm enum
// Keys, labels and lead times must stay in sync with the seed file format

use chrono::Duration;
use month_calendar::models::alarm::Alarm;
use test_case::test_case;

#[test_case(Alarm::None, "none" ; "none")]
#[test_case(Alarm::TenMinutes, "10min" ; "ten minutes")]
#[test_case(Alarm::ThirtyMinutes, "30min" ; "thirty minutes")]
#[test_case(Alarm::OneHour, "1hour" ; "one hour")]
#[test_case(Alarm::OneDay, "1day" ; "one day")]
fn test_key_matches_serialized_form(alarm: Alarm, key: &str) {
    assert_eq!(alarm.key(), key);
    assert_eq!(
        serde_json::to_string(&alarm).unwrap(),
        format!("\"{}\"", key)
    );
    assert_eq!(key.parse::<Alarm>().unwrap(), alarm);
}

#[test_case(Alarm::None, None ; "no reminder")]
#[test_case(Alarm::TenMinutes, Some(Duration::minutes(10)) ; "ten minutes")]
#[test_case(Alarm::ThirtyMinutes, Some(Duration::minutes(30)) ; "thirty minutes")]
#[test_case(Alarm::OneHour, Some(Duration::minutes(60)) ; "one hour")]
#[test_case(Alarm::OneDay, Some(Duration::hours(24)) ; "one day")]
fn test_lead_time(alarm: Alarm, expected: Option<Duration>) {
    assert_eq!(alarm.lead_time(), expected);
    assert_eq!(alarm.is_set(), expected.is_some());
}

#[test_case("1HOUR", Alarm::OneHour ; "upper case")]
#[test_case("  30min ", Alarm::ThirtyMinutes ; "surrounding whitespace")]
#[test_case("None", Alarm::None ; "mixed case none")]
fn test_parse_is_lenient(input: &str, expected: Alarm) {
    assert_eq!(input.parse::<Alarm>().unwrap(), expected);
}

#[test_case("2hours" ; "unsupported lead time")]
#[test_case("" ; "empty")]
fn test_parse_rejects_unknown(input: &str) {
    let err = input.parse::<Alarm>().unwrap_err();
    assert!(err.to_string().contains("Unknown alarm"));
}

#[test]
fn test_default_is_none_and_labels_are_distinct() {
    assert_eq!(Alarm::default(), Alarm::None);

    let mut labels: Vec<_> = Alarm::all().iter().map(Alarm::label).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), Alarm::all().len());
    assert_eq!(Alarm::OneDay.to_string(), "1 day before");
}
