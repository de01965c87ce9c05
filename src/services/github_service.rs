use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

use crate::errors::{GitHubError, GitHubResult};
use crate::mappers::contribution_mapper;
use crate::models::contribution::ContributionPoint;
use crate::models::event::GithubEvent;
use crate::validators;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "github-stats-viewer";

/// Largest page the repos and events endpoints hand out.
const PAGE_SIZE: u32 = 100;

/// The three per-user lookups the dashboard is built from.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Raw `/users/{username}` resource.
    async fn user_info(&self, username: &str, token: Option<&str>) -> GitHubResult<Value>;

    /// Raw first page of `/users/{username}/repos`.
    async fn user_repos(&self, username: &str, token: Option<&str>) -> GitHubResult<Value>;

    /// Daily commit series built from the user's recent push events.
    async fn user_contributions(
        &self,
        username: &str,
        token: Option<&str>,
    ) -> GitHubResult<Vec<ContributionPoint>>;
}

pub struct GitHubService {
    client: Client,
    base_url: String,
}

impl GitHubService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        GitHubService { client, base_url }
    }

    /// Client carrying the headers GitHub expects on every call.
    pub fn build_client(user_agent: &str) -> reqwest::Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        Client::builder()
            .user_agent(user_agent.to_string())
            .default_headers(headers)
            .build()
    }

    fn user_url(&self, username: &str, tail: &str) -> String {
        format!(
            "{}/users/{}{}",
            self.base_url,
            validators::to_path_segment(username),
            tail
        )
    }

    async fn fetch<T: DeserializeOwned>(&self, url: String, token: Option<&str>) -> GitHubResult<T> {
        log::info!("Making request to {}...", url);

        let mut request = self.client.get(&url);
        if let Some(token) = token {
            HeaderValue::from_str(token).map_err(|_| GitHubError::InvalidToken)?;
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|source| GitHubError::Http {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("{} returned {:?}: {}", url, status, body);
            return Err(GitHubError::UnexpectedStatus {
                url,
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or(status.as_str())
                    .to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(|source| GitHubError::Http {
            url: url.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|e| GitHubError::Decode {
            url,
            message: e.to_string(),
        })
    }

    pub async fn user_events(
        &self,
        username: &str,
        token: Option<&str>,
    ) -> GitHubResult<Vec<GithubEvent>> {
        let url = self.user_url(username, &format!("/events?per_page={}", PAGE_SIZE));
        self.fetch(url, token).await
    }
}

#[async_trait]
impl ProfileSource for GitHubService {
    #[instrument(skip(self, token))]
    async fn user_info(&self, username: &str, token: Option<&str>) -> GitHubResult<Value> {
        self.fetch(self.user_url(username, ""), token).await
    }

    #[instrument(skip(self, token))]
    async fn user_repos(&self, username: &str, token: Option<&str>) -> GitHubResult<Value> {
        let url = self.user_url(username, &format!("/repos?per_page={}", PAGE_SIZE));
        self.fetch(url, token).await
    }

    #[instrument(skip(self, token))]
    async fn user_contributions(
        &self,
        username: &str,
        token: Option<&str>,
    ) -> GitHubResult<Vec<ContributionPoint>> {
        let events = self.user_events(username, token).await?;
        let points = contribution_mapper::to_contribution_points(&events);
        log::debug!(
            "{} events for {} reduced to {} contribution days",
            events.len(),
            username,
            points.len()
        );
        Ok(points)
    }
}

#[cfg(test)]
#[path = "github_service_tests.rs"]
mod tests;
