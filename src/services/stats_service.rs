use std::sync::Arc;

use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

use crate::errors::{ApiError, GitHubError};
use crate::mappers::repository_mapper;
use crate::models::github_user::GithubUser;
use crate::models::repository::Repository;
use crate::models::user_stats::UserStats;

use super::github_service::ProfileSource;

/// How the three lookups behind a dashboard are issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FetchStrategy {
    /// One after another, stopping at the first failure.
    #[default]
    Sequential,
    /// All at once, failing as soon as any of them fails.
    Concurrent,
}

/// Builds the dashboard view model out of a [`ProfileSource`].
pub struct StatsService {
    pub source: Arc<dyn ProfileSource>,
    pub strategy: FetchStrategy,
}

impl StatsService {
    pub fn new(source: Arc<dyn ProfileSource>, strategy: FetchStrategy) -> Self {
        StatsService { source, strategy }
    }

    /// Fetch and aggregate everything for `username`. Any failure fails the whole thing.
    #[instrument(skip(self, token))]
    pub async fn get_user_stats(
        &self,
        username: &str,
        token: Option<&str>,
    ) -> Result<UserStats, ApiError> {
        let (user_info, repos, contributions) = match self.strategy {
            FetchStrategy::Sequential => {
                let user_info = self.source.user_info(username, token).await?;
                let repos = self.source.user_repos(username, token).await?;
                let contributions = self.source.user_contributions(username, token).await?;
                (user_info, repos, contributions)
            }
            FetchStrategy::Concurrent => tokio::try_join!(
                self.source.user_info(username, token),
                self.source.user_repos(username, token),
                self.source.user_contributions(username, token),
            )?,
        };

        let user_info: GithubUser = decode(user_info, "user")?;
        let repos: Vec<Repository> = decode(repos, "repository list")?;

        log::info!(
            "Aggregated {} repositories and {} contribution days for {}",
            repos.len(),
            contributions.len(),
            username
        );

        Ok(UserStats {
            user_info,
            total_repos: repos.len(),
            total_stars: repository_mapper::total_stars(&repos),
            total_forks: repository_mapper::total_forks(&repos),
            languages: repository_mapper::to_language_shares(&repos),
            contributions,
        })
    }
}

fn decode<T: DeserializeOwned>(value: Value, resource: &str) -> Result<T, GitHubError> {
    serde_json::from_value(value).map_err(|e| GitHubError::UnexpectedPayload {
        resource: resource.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "stats_service_tests.rs"]
mod tests;
