//! HTTP surface of the proxy.

pub mod translate;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::core::translator::TranslatorService;

pub fn router(service: Arc<TranslatorService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/translate", post(translate::handle))
        .with_state(service)
}

async fn health() -> &'static str {
    "OK"
}
