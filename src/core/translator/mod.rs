//! Translation pipeline
//!
//! Strictly sequential per request: validate → cache lookup (short-circuit
//! on hit) → upstream call → fallback normalization → cache write. The
//! cache and the provider are injected so tests can substitute both.

pub mod cache;
pub mod types;
pub mod upstream;

use std::sync::Arc;

use tracing::debug;

use crate::config::ProxyConfig;
use crate::shared::error::{AppError, AppResult};
use cache::TranslationCache;
use types::{TranslateParams, TranslationRequest, TranslationResult};
use upstream::TranslationProvider;

pub struct TranslatorService {
    config: ProxyConfig,
    cache: Arc<dyn TranslationCache>,
    provider: Arc<dyn TranslationProvider>,
}

impl TranslatorService {
    pub fn new(
        config: ProxyConfig,
        cache: Arc<dyn TranslationCache>,
        provider: Arc<dyn TranslationProvider>,
    ) -> Self {
        Self { config, cache, provider }
    }

    /// Apply configured defaults and reject requests the upstream should
    /// never see. No side effects.
    fn validate(&self, params: TranslateParams) -> AppResult<TranslationRequest> {
        let text = params.q.unwrap_or_default();
        if text.trim().is_empty() {
            return Err(AppError::EmptyText);
        }

        let source = params
            .source
            .unwrap_or_else(|| self.config.default_source.clone());
        let target = params
            .target
            .unwrap_or_else(|| self.config.default_target.clone());

        if let Some(allowed) = &self.config.allowed_targets {
            if !allowed.iter().any(|code| code == &target) {
                return Err(AppError::UnsupportedTarget(target));
            }
        }

        Ok(TranslationRequest { text, source, target })
    }

    pub async fn translate(&self, params: TranslateParams) -> AppResult<TranslationResult> {
        let request = self.validate(params)?;
        let key = request.cache_key();

        if let Some(cached) = self.cache.lookup(&key) {
            debug!("cache hit for {}|{}", request.source, request.target);
            return Ok(TranslationResult { translated_text: cached });
        }

        let translated = self
            .provider
            .translate(&request.text, &request.source, &request.target)
            .await?;

        // A well-formed but empty translation degrades to an identity
        // transform rather than an error.
        let translated = if translated.is_empty() {
            debug!("empty translation from upstream, echoing input");
            request.text.clone()
        } else {
            translated
        };

        self.cache.store(key, translated.clone());
        Ok(TranslationResult { translated_text: translated })
    }
}
