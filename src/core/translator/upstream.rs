//! Upstream provider client
//!
//! One outbound GET per translation, no retry, no circuit breaker. The
//! provider-specific response shape is confined to this module: the rest of
//! the pipeline only sees `TranslationProvider`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::shared::error::{AppError, AppResult};

const USER_AGENT: &str = concat!("translation-proxy/", env!("CARGO_PKG_VERSION"));

/// Seam between the pipeline and the external translation service.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` for the `source`/`target` pair. An empty string is a
    /// valid return value; the caller decides what to do with it.
    async fn translate(&self, text: &str, source: &str, target: &str) -> AppResult<String>;
}

/// Response shape of the MyMemory query endpoint. Only the nested translated
/// text is of interest; everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl MyMemoryResponse {
    /// Extract the translated text, or fail when the expected nested keys
    /// are absent. An empty string is not a format error.
    fn into_translated_text(self) -> AppResult<String> {
        self.response_data
            .and_then(|data| data.translated_text)
            .ok_or_else(|| AppError::UpstreamFormat {
                detail: "responseData.translatedText missing".to_string(),
            })
    }
}

/// Client for the MyMemory translation API.
pub struct MyMemoryClient {
    http: Client,
    endpoint: String,
}

impl MyMemoryClient {
    pub fn new(endpoint: String) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal { detail: e.to_string() })?;
        Ok(Self { http, endpoint })
    }

    /// `<endpoint>?q=<url-encoded text>&langpair=<source>|<target>`. The text
    /// is encoded exactly once; language codes are passed through as-is.
    fn query_url(&self, text: &str, source: &str, target: &str) -> String {
        format!(
            "{}?q={}&langpair={}|{}",
            self.endpoint,
            urlencoding::encode(text),
            source,
            target
        )
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryClient {
    async fn translate(&self, text: &str, source: &str, target: &str) -> AppResult<String> {
        let url = self.query_url(text, source, target);
        debug!("querying upstream for {}|{}", source, target);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable { detail: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamUnavailable {
                detail: format!("upstream returned status {}", status),
            });
        }

        let body: MyMemoryResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamFormat { detail: e.to_string() })?;

        body.into_translated_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> AppResult<String> {
        serde_json::from_str::<MyMemoryResponse>(body)
            .map_err(|e| AppError::UpstreamFormat { detail: e.to_string() })
            .and_then(MyMemoryResponse::into_translated_text)
    }

    #[test]
    fn extracts_nested_translated_text() {
        let body = r#"{
            "responseData": {"translatedText": "xin chào", "match": 1.0},
            "responseStatus": 200,
            "matches": []
        }"#;
        assert_eq!(parse(body).unwrap(), "xin chào");
    }

    #[test]
    fn empty_translated_text_is_not_an_error() {
        let body = r#"{"responseData": {"translatedText": ""}}"#;
        assert_eq!(parse(body).unwrap(), "");
    }

    #[test]
    fn missing_nested_keys_are_a_format_error() {
        for body in [
            r#"{}"#,
            r#"{"responseData": {}}"#,
            r#"{"responseData": null}"#,
            r#"{"responseStatus": 403}"#,
        ] {
            assert!(matches!(parse(body), Err(AppError::UpstreamFormat { .. })), "body: {body}");
        }
    }

    #[test]
    fn undecodable_body_is_a_format_error() {
        assert!(matches!(parse("<html>"), Err(AppError::UpstreamFormat { .. })));
    }

    #[test]
    fn query_url_encodes_the_text_once() {
        let client = MyMemoryClient::new("https://example.test/get".to_string()).unwrap();
        let url = client.query_url("xin chào & friends", "vi", "en");
        assert_eq!(
            url,
            "https://example.test/get?q=xin%20ch%C3%A0o%20%26%20friends&langpair=vi|en"
        );
    }
}
