//! GitHub statistics dashboard.
//!
//! Three JSON endpoints proxy GitHub's user, repository and event resources,
//! and a server-rendered dashboard aggregates them into profile stats, a
//! daily commit chart and a language breakdown.

use std::sync::Arc;

use axum::body::{boxed, Body};
use axum::http::{Request, Response, StatusCode};
use axum::routing::get;
use axum::Router;
use handlebars::Handlebars;
use tower::{ServiceBuilder, ServiceExt};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod charts;
pub mod controllers;
pub mod errors;
pub mod mappers;
pub mod models;
pub mod services;
pub mod validators;

use controllers::{github, index};
use services::github_service::GitHubService;
use services::stats_service::{FetchStrategy, StatsService};

pub struct AppState {
    pub registry: Handlebars<'static>,
    pub github_service: Arc<GitHubService>,
    pub stats_service: StatsService,
}

impl AppState {
    pub fn new(
        registry: Handlebars<'static>,
        github_service: GitHubService,
        strategy: FetchStrategy,
    ) -> Self {
        let github_service = Arc::new(github_service);
        let stats_service = StatsService::new(github_service.clone(), strategy);
        AppState {
            registry,
            github_service,
            stats_service,
        }
    }
}

pub fn register_templates() -> Result<Handlebars<'static>, handlebars::TemplateError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_template_string("template", include_str!("templates/template.hbs"))?;
    handlebars.register_template_string("index", include_str!("templates/index.hbs"))?;
    handlebars.register_template_string("errors/error", include_str!("templates/errors/error.hbs"))?;
    Ok(handlebars)
}

/// Routes for the dashboard and the proxy endpoints; anything else is served from `static_dir`.
pub fn create_router(state: Arc<AppState>, static_dir: &str) -> Router {
    let static_dir = static_dir.to_string();
    Router::new()
        .route("/", get(index::get_index).post(index::post_index))
        .route("/api/github/userInfo", get(github::get_user_info))
        .route("/api/github/userRepos", get(github::get_user_repos))
        .route("/api/github/userContributions", get(github::get_user_contributions))
        .fallback_service(get(|req: Request<Body>| async move {
            match ServeDir::new(static_dir).oneshot(req).await {
                Ok(res) => res.map(boxed),
                Err(err) => Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(boxed(Body::from(format!("error: {err}"))))
                    .expect("error response"),
            }
        }))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
