use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Commits pushed on one UTC calendar day. `date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionPoint {
    pub date: NaiveDate,
    pub commits: u64,
}
