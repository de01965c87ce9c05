use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::contribution::ContributionPoint;
use crate::models::event::GithubEvent;

/// Most recent days kept in a contribution series.
pub const MAX_CONTRIBUTION_DAYS: usize = 30;

/// Group push events by UTC day and keep the latest 30 days, oldest first.
pub fn to_contribution_points(events: &[GithubEvent]) -> Vec<ContributionPoint> {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for event in events.iter().filter(|e| e.is_push()) {
        *per_day.entry(event.created_at.date_naive()).or_insert(0) += event.commit_count();
    }

    let skip = per_day.len().saturating_sub(MAX_CONTRIBUTION_DAYS);
    per_day
        .into_iter()
        .skip(skip)
        .map(|(date, commits)| ContributionPoint { date, commits })
        .collect()
}

#[cfg(test)]
#[path = "contribution_mapper_tests.rs"]
mod tests;
