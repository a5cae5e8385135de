//! Runtime configuration
//!
//! Everything the request pipeline needs to know is injected through
//! `ProxyConfig` rather than read at the call site, so both deployed
//! variants of the service (restricted target list with a fixed default
//! source, and unrestricted with auto-detection) are plain configuration.

use std::env;

/// Query endpoint of the MyMemory translation API.
pub const MYMEMORY_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// Target languages accepted by the restricted variant of the service.
const DEFAULT_SUPPORTED_TARGETS: &[&str] = &["vi", "en", "ru", "zh", "ko", "ja", "pt", "es"];

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Source language assumed when the request omits `source`.
    pub default_source: String,
    /// Target language assumed when the request omits `target`.
    pub default_target: String,
    /// Allow-list for `target`. `None` means any target code is accepted.
    pub allowed_targets: Option<Vec<String>>,
    /// Base URL of the upstream query endpoint, overridable for tests.
    pub upstream_endpoint: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            default_source: "vi".to_string(),
            default_target: "en".to_string(),
            allowed_targets: Some(
                DEFAULT_SUPPORTED_TARGETS
                    .iter()
                    .map(|code| code.to_string())
                    .collect(),
            ),
            upstream_endpoint: MYMEMORY_ENDPOINT.to_string(),
        }
    }
}

impl ProxyConfig {
    /// Variant with auto-detected source and no target restriction.
    pub fn unrestricted() -> Self {
        Self {
            default_source: "auto".to_string(),
            allowed_targets: None,
            ..Self::default()
        }
    }

    /// Load the default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        Self::with_overrides(|key| env::var(key).ok())
    }

    /// Same as `from_env`, but with the variable source injected so the
    /// override wiring is testable without touching process-global state.
    fn with_overrides(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(source) = lookup("DEFAULT_SOURCE_LANG") {
            config.default_source = source;
        }
        if let Some(target) = lookup("DEFAULT_TARGET_LANG") {
            config.default_target = target;
        }
        if let Some(raw) = lookup("SUPPORTED_TARGET_LANGS") {
            config.allowed_targets = parse_allowed_targets(&raw);
        }
        if let Some(endpoint) = lookup("UPSTREAM_ENDPOINT") {
            config.upstream_endpoint = endpoint;
        }
        config
    }
}

/// Parse a comma-separated allow-list. `*` (or an empty value) lifts the
/// restriction entirely.
fn parse_allowed_targets(raw: &str) -> Option<Vec<String>> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "*" {
        return None;
    }
    Some(
        raw.split(',')
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect(),
    )
}
