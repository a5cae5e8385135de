//! `POST /api/translate`

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::core::translator::types::{TranslateParams, TranslationResult};
use crate::core::translator::TranslatorService;
use crate::shared::error::AppError;

/// The body is taken as raw bytes and deserialized by hand so that any
/// malformed payload, non-UTF-8 bytes included, maps to the service's own
/// error contract instead of an extractor's plain-text rejection, and so no
/// particular content-type header is required.
pub async fn handle(
    State(service): State<Arc<TranslatorService>>,
    body: Bytes,
) -> Result<Json<TranslationResult>, AppError> {
    let params = TranslateParams::from_body(&body)?;
    let result = service.translate(params).await?;
    Ok(Json(result))
}
