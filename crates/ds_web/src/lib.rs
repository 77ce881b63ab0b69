use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

pub mod fetch;
pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/feed", get(handlers::get_feed))
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/summarize", post(handlers::summarize))
        .route(
            "/api/pins",
            get(handlers::list_pins).delete(handlers::clear_pins),
        )
        .route("/api/pins/toggle", post(handlers::toggle_pin))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(addr: std::net::SocketAddr, state: AppState) -> ds_core::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app)
        .await
        .map_err(ds_core::Error::Io)?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use ds_core::{Article, Error, FeedSource, Result};
}
