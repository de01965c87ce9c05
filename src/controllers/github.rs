//! JSON proxy endpoints under `/api/github`.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value;

use crate::errors::ApiError;
use crate::models::contribution::ContributionPoint;
use crate::models::query::GithubQuery;
use crate::services::github_service::ProfileSource;
use crate::AppState;

type RawQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

// Every failure, including a query string axum cannot parse, leaves as a JSON error body.
fn parse_query(raw: RawQuery) -> Result<GithubQuery, ApiError> {
    match raw {
        Ok(Query(pairs)) => Ok(GithubQuery::from_pairs(pairs)),
        Err(rejection) => Err(ApiError::unknown(rejection.body_text())),
    }
}

fn require_username(query: &GithubQuery) -> Result<&str, ApiError> {
    query.username().ok_or_else(ApiError::username_required)
}

#[axum_macros::debug_handler]
pub async fn get_user_info(
    State(state): State<Arc<AppState>>,
    raw: RawQuery,
) -> Result<Json<Value>, ApiError> {
    let query = parse_query(raw)?;
    let username = require_username(&query)?;
    let user = state.github_service.user_info(username, query.token()).await?;
    Ok(Json(user))
}

#[axum_macros::debug_handler]
pub async fn get_user_repos(
    State(state): State<Arc<AppState>>,
    raw: RawQuery,
) -> Result<Json<Value>, ApiError> {
    let query = parse_query(raw)?;
    let username = require_username(&query)?;
    let repos = state.github_service.user_repos(username, query.token()).await?;
    Ok(Json(repos))
}

#[axum_macros::debug_handler]
pub async fn get_user_contributions(
    State(state): State<Arc<AppState>>,
    raw: RawQuery,
) -> Result<Json<Vec<ContributionPoint>>, ApiError> {
    let query = parse_query(raw)?;
    let username = require_username(&query)?;
    let points = state
        .github_service
        .user_contributions(username, query.token())
        .await?;
    Ok(Json(points))
}
