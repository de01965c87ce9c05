use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const PUSH_EVENT: &str = "PushEvent";

/// An entry from `/users/{username}/events`.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub commits: Option<Vec<CommitRef>>,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitRef {
    pub sha: String,
}

impl GithubEvent {
    pub fn is_push(&self) -> bool {
        self.kind == PUSH_EVENT
    }

    /// Commits carried by a push. Falls back to `size` when the commit list is omitted.
    pub fn commit_count(&self) -> u64 {
        match &self.payload.commits {
            Some(commits) => commits.len() as u64,
            None => self.payload.size.unwrap_or(0),
        }
    }
}
