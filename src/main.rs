use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translation_proxy::api;
use translation_proxy::config::ProxyConfig;
use translation_proxy::core::translator::cache::MemoryCache;
use translation_proxy::core::translator::upstream::MyMemoryClient;
use translation_proxy::core::translator::TranslatorService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "translation_proxy=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let host: std::net::IpAddr = std::env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string())
        .parse()
        .context("HOST must be a valid IP address")?;
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "4000".to_string())
        .parse()
        .context("PORT must be a valid number")?;

    let config = ProxyConfig::from_env();
    info!(
        "defaults {}|{}, target restriction: {}",
        config.default_source,
        config.default_target,
        match &config.allowed_targets {
            Some(list) => list.join(","),
            None => "none".to_string(),
        }
    );

    let provider = MyMemoryClient::new(config.upstream_endpoint.clone())
        .map_err(|e| anyhow::anyhow!("failed to build upstream client: {:?}", e))?;
    let service = Arc::new(TranslatorService::new(
        config,
        Arc::new(MemoryCache::new()),
        Arc::new(provider),
    ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = api::router(service).layer(cors);

    let addr = SocketAddr::from((host, port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("translation proxy listening on http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
