use serde::{Deserialize, Serialize};

use crate::shared::error::{AppError, AppResult};

/// Raw body of `POST /api/translate`, before validation. Every field is
/// optional here; defaults and rejection rules live in the service.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TranslateParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

impl TranslateParams {
    /// Parse a raw request body. Anything that is not a JSON object maps to
    /// `InvalidPayload`: undecodable bytes, non-JSON text, and well-formed
    /// JSON of the wrong shape alike. The object check happens before the
    /// struct deserialization because serde's derived deserializer would
    /// otherwise accept an array positionally.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|_| AppError::InvalidPayload)?;
        if !value.is_object() {
            return Err(AppError::InvalidPayload);
        }
        serde_json::from_value(value).map_err(|_| AppError::InvalidPayload)
    }
}

/// A validated request with defaults applied.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub source: String,
    pub target: String,
}

/// Cache key for one translation. Kept as a structured triple so distinct
/// requests can never collide, whatever characters the text contains.
pub type CacheKey = (String, String, String);

impl TranslationRequest {
    pub fn cache_key(&self) -> CacheKey {
        (self.text.clone(), self.source.clone(), self.target.clone())
    }
}

/// The only successful response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}
