use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ds_core::{FeedSource, SummaryRequest};
use ds_feed::aggregate::{matches_query, rank};
use serde::Deserialize;
use serde_json::json;

use crate::fetch;
use crate::AppState;

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

#[derive(Deserialize)]
pub struct FeedParams {
    source: String,
}

/// Raw-feed proxy: fetch the upstream document and hand it to the client
/// verbatim, wrapped in JSON.
pub async fn get_feed(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeedParams>,
) -> Response {
    let Ok(source) = params.source.parse::<FeedSource>() else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid source");
    };

    match fetch::fetch_raw(&state.http, source).await {
        Ok(feed) => Json(json!({ "feed": feed })).into_response(),
        Err(e) => {
            tracing::error!("error fetching {} feed: {}", source, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch {} feed", source),
            )
        }
    }
}

#[derive(Deserialize)]
pub struct ArticleParams {
    sources: Option<String>,
    q: Option<String>,
}

/// Aggregate view: fetch the requested sources in parallel, normalize,
/// merge, apply pin-aware ranking and the optional search filter.
pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ArticleParams>,
) -> Response {
    let sources = match params.sources.as_deref() {
        None | Some("") => FeedSource::ALL.to_vec(),
        Some(raw) => {
            let mut sources = Vec::new();
            for slug in raw.split(',') {
                match slug.trim().parse::<FeedSource>() {
                    Ok(source) => sources.push(source),
                    Err(_) => return error_response(StatusCode::BAD_REQUEST, "Invalid source"),
                }
            }
            sources
        }
    };

    let fetches = sources
        .iter()
        .map(|&source| fetch::fetch_articles(&state.http, source));
    let mut articles: Vec<_> = futures::future::join_all(fetches)
        .await
        .into_iter()
        .flatten()
        .collect();

    let pins = match state.pins.pins().await {
        Ok(pins) => pins,
        Err(e) => {
            tracing::warn!("failed to load pins, ranking without them: {}", e);
            Vec::new()
        }
    };
    rank(&mut articles, &pins);

    if let Some(query) = params.q.as_deref() {
        articles.retain(|article| matches_query(article, query));
    }

    Json(articles).into_response()
}

/// Summarization proxy: validate and forward to the configured model.
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummaryRequest>,
) -> Response {
    if request.title.trim().is_empty() || request.content.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Title and content are required");
    }

    match state.summarizer.summarize(&request).await {
        Ok(summary) => Json(json!({ "summary": summary })).into_response(),
        Err(e) => {
            tracing::error!("error generating summary: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate summary",
            )
        }
    }
}

pub async fn list_pins(State(state): State<Arc<AppState>>) -> Response {
    match state.pins.pins().await {
        Ok(pins) => Json(pins).into_response(),
        Err(e) => {
            tracing::error!("failed to load pins: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load pins")
        }
    }
}

#[derive(Deserialize)]
pub struct TogglePinRequest {
    link: String,
    #[serde(default)]
    title: String,
}

pub async fn toggle_pin(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TogglePinRequest>,
) -> Response {
    if request.link.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Link is required");
    }

    let pinned = match state.pins.toggle(&request.link, &request.title).await {
        Ok(pinned) => pinned,
        Err(e) => {
            tracing::error!("failed to toggle pin: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to toggle pin");
        }
    };

    match state.pins.pins().await {
        Ok(pins) => Json(json!({ "pinned": pinned, "pins": pins })).into_response(),
        Err(e) => {
            tracing::error!("failed to reload pins: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load pins")
        }
    }
}

pub async fn clear_pins(State(state): State<Arc<AppState>>) -> Response {
    match state.pins.clear().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("failed to clear pins: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to clear pins")
        }
    }
}
