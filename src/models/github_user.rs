use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The subset of GitHub's user resource the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub followers: u64,
    pub following: u64,
    // Absent and null both land on None.
    #[serde(default)]
    pub hireable: Option<bool>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
}

impl GithubUser {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }
}
