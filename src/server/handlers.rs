use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

use crate::app_state::AppState;
use crate::meta::build_page_metadata;
use crate::server::render;

fn cache_header(revalidate_secs: u64) -> [(header::HeaderName, String); 1] {
    [(
        header::CACHE_CONTROL,
        format!("public, s-maxage={revalidate_secs}, stale-while-revalidate"),
    )]
}

/// `GET /` — the post listing. Upstream failure is fatal for this render;
/// there is nothing sensible to show without the listing.
pub async fn index(State(state): State<AppState>) -> Response {
    match state.cms.fetch_all_pages().await {
        Ok(pages) => (
            cache_header(state.config.revalidate_secs()),
            Html(render::render_index(&pages, &state.config, &state.cleaner)),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, retriable = err.should_retry(), "failed to fetch page listing");
            (
                StatusCode::BAD_GATEWAY,
                Html(render::render_upstream_error(&state.config)),
            )
                .into_response()
        }
    }
}

/// `GET /{slug}` — a single post. Not-found and upstream failure both render
/// the not-found page; a broken CMS must not crash the render.
pub async fn show_post(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let page = match state.cms.fetch_page_by_slug(&slug).await {
        Ok(Some(page)) => page,
        Ok(None) => return not_found(&state),
        Err(err) => {
            warn!(error = %err, slug = %slug, "failed to fetch page by slug");
            return not_found(&state);
        }
    };

    let metadata = build_page_metadata(&page, &state.config, &state.cleaner);
    let cleaned_content = state.cleaner.clean(&page.content.rendered);

    (
        cache_header(state.config.revalidate_secs()),
        Html(render::render_post(
            &page,
            &metadata,
            &cleaned_content,
            &state.config,
        )),
    )
        .into_response()
}

fn not_found(state: &AppState) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(render::render_not_found(&state.config)),
    )
        .into_response()
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    cms_origin: String,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        cms_origin: state.cms.origin().to_string(),
    })
}
