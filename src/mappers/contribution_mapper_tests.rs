//! Tests for grouping push events into a daily commit series.

use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

use super::*;

fn push(created_at: &str, commits: usize) -> serde_json::Value {
    let commits: Vec<_> = (0..commits).map(|i| json!({ "sha": format!("{i:040}") })).collect();
    json!({
        "type": "PushEvent",
        "created_at": created_at,
        "payload": { "commits": commits }
    })
}

fn events(values: Vec<serde_json::Value>) -> Vec<GithubEvent> {
    serde_json::from_value(serde_json::Value::Array(values)).unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn no_push_events_yields_empty_series() {
    let input = events(vec![
        json!({ "type": "WatchEvent", "created_at": "2024-03-01T10:00:00Z", "payload": {} }),
        json!({ "type": "PullRequestEvent", "created_at": "2024-03-02T10:00:00Z", "payload": { "action": "closed" } }),
    ]);

    assert!(to_contribution_points(&input).is_empty());
}

#[test]
fn pushes_on_same_utc_day_are_summed() {
    let input = events(vec![
        push("2024-03-01T00:05:00Z", 2),
        push("2024-03-01T23:59:59Z", 3),
        push("2024-03-02T00:00:00Z", 1),
    ]);

    assert_eq!(
        to_contribution_points(&input),
        vec![
            ContributionPoint { date: day("2024-03-01"), commits: 5 },
            ContributionPoint { date: day("2024-03-02"), commits: 1 },
        ]
    );
}

#[test]
fn offsets_are_truncated_in_utc() {
    // 23:30 at -02:00 is already the next day in UTC.
    let input = events(vec![push("2024-03-01T23:30:00-02:00", 4)]);

    assert_eq!(to_contribution_points(&input)[0].date, day("2024-03-02"));
}

#[test]
fn non_push_events_contribute_nothing() {
    let input = events(vec![
        push("2024-03-01T08:00:00Z", 1),
        json!({ "type": "CreateEvent", "created_at": "2024-03-01T09:00:00Z", "payload": { "ref": "main" } }),
        json!({ "type": "IssuesEvent", "created_at": "2024-03-03T09:00:00Z", "payload": {} }),
    ]);

    assert_eq!(
        to_contribution_points(&input),
        vec![ContributionPoint { date: day("2024-03-01"), commits: 1 }]
    );
}

#[test]
fn series_is_ascending_even_when_events_are_newest_first() {
    let input = events(vec![
        push("2024-03-05T08:00:00Z", 1),
        push("2024-03-03T08:00:00Z", 1),
        push("2024-03-04T08:00:00Z", 1),
    ]);

    let dates: Vec<_> = to_contribution_points(&input).into_iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![day("2024-03-03"), day("2024-03-04"), day("2024-03-05")]);
}

#[test]
fn keeps_only_the_latest_thirty_days() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    // Newest first, like the events API.
    let input = events(
        (0..45i64)
            .rev()
            .map(|i| push(&(start + Duration::days(i)).to_rfc3339(), (i as usize % 3) + 1))
            .collect(),
    );

    let points = to_contribution_points(&input);

    assert_eq!(points.len(), MAX_CONTRIBUTION_DAYS);
    assert_eq!(points.first().unwrap().date, day("2024-01-16"));
    assert_eq!(points.last().unwrap().date, day("2024-02-14"));
    assert!(points.windows(2).all(|w| w[0].date <= w[1].date));

    let expected: u64 = (15..45u64).map(|i| (i % 3) + 1).sum();
    assert_eq!(points.iter().map(|p| p.commits).sum::<u64>(), expected);
}

#[test]
fn missing_commit_list_falls_back_to_size() {
    let input = events(vec![
        json!({ "type": "PushEvent", "created_at": "2024-03-01T08:00:00Z", "payload": { "size": 4 } }),
        json!({ "type": "PushEvent", "created_at": "2024-03-01T09:00:00Z", "payload": {} }),
    ]);

    assert_eq!(
        to_contribution_points(&input),
        vec![ContributionPoint { date: day("2024-03-01"), commits: 4 }]
    );
}

#[test]
fn series_serializes_with_plain_dates() {
    let input = events(vec![push("2024-03-01T08:00:00Z", 2)]);

    let value = serde_json::to_value(to_contribution_points(&input)).unwrap();
    assert_eq!(value, json!([{ "date": "2024-03-01", "commits": 2 }]));
}
