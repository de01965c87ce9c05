use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Form;

use crate::errors::ApiError;
use crate::mappers::dashboard_mapper;
use crate::models::dashboard::Dashboard;
use crate::models::query::GithubQuery;
use crate::AppState;

const TITLE: &str = "GitHub Statistics Viewer";

pub async fn get_index(State(state): State<Arc<AppState>>) -> Response {
    render_dashboard(&state, "", &Dashboard::default())
}

pub async fn post_index(
    State(state): State<Arc<AppState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let mut dashboard = Dashboard::default();
    dashboard.begin();

    let query = match form {
        Ok(Form(pairs)) => GithubQuery::from_pairs(pairs),
        Err(rejection) => {
            dashboard.finish(Err(ApiError::unknown(rejection.body_text())));
            return render_dashboard(&state, "", &dashboard);
        }
    };

    let result = match query.username() {
        Some(username) => {
            state
                .stats_service
                .get_user_stats(username, query.token())
                .await
        }
        None => Err(ApiError::username_required()),
    };
    if let Err(err) = &result {
        log::warn!("Dashboard fetch failed: {:?}", err);
    }
    dashboard.finish(result);

    let username = query.username.unwrap_or_default();
    render_dashboard(&state, &username, &dashboard)
}

fn render_dashboard(state: &AppState, username: &str, dashboard: &Dashboard) -> Response {
    let page = dashboard_mapper::to_page(username, dashboard);
    super::render_page(&state.registry, TITLE, state.registry.render("index", &page))
}
