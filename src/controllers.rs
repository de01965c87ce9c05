pub mod github;
pub mod index;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use handlebars::Handlebars;
use serde::Serialize;

use crate::errors::ApiError;

#[derive(Debug, Serialize)]
pub struct TemplateViewModel {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
struct ErrorViewModel {
    code: u16,
    reason: String,
}

/// Render `body` inside the page layout, falling back to the 500 page.
pub fn render_page(registry: &Handlebars<'static>, title: &str, body: Result<String, handlebars::RenderError>) -> Response {
    let data = body.and_then(|body| {
        registry.render(
            "template",
            &TemplateViewModel {
                title: title.into(),
                body,
            },
        )
    });

    match data {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            let err = ApiError::unknown(format!("failed to render {} page: {}", title, err));
            log::error!("{:?}", err);
            get_error_page(registry, err.status_code())
        }
    }
}

pub fn get_error_page(registry: &Handlebars<'static>, status: StatusCode) -> Response {
    let vm = ErrorViewModel {
        code: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Error").to_string(),
    };
    let page = registry.render("errors/error", &vm).and_then(|body| {
        registry.render(
            "template",
            &TemplateViewModel {
                title: vm.reason.clone(),
                body,
            },
        )
    });

    match page {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            log::error!("Failed to render error page: {}", err);
            (status, vm.reason).into_response()
        }
    }
}
