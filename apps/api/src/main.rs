mod config;
mod db;
mod editor;
mod enhance;
mod errors;
mod heuristics;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::editor::guard::ActionGuard;
use crate::llm_client::LlmClient;
use crate::render::export::S3Exporter;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume builder API v{}", env!("CARGO_PKG_VERSION"));

    // PostgreSQL + migrations
    let pool = create_pool(&config.database_url).await?;
    let store = Arc::new(PgResumeStore::new(pool));

    // S3 / MinIO for exports
    let s3 = build_s3_client(&config).await;
    let exporter = Arc::new(S3Exporter::new(s3, config.s3_bucket.clone()));
    info!("S3 exporter initialized (bucket: {})", config.s3_bucket);

    // AI gateway
    let llm = LlmClient::new(
        config.ai_gateway_api_key.clone(),
        config.ai_gateway_url.clone(),
        config.ai_model.clone(),
    );
    info!("LLM client initialized (model: {})", llm.model());

    info!(
        "Render defaults: template={} font={}",
        config.render_defaults.template, config.render_defaults.font
    );

    let state = AppState {
        store,
        ai: Arc::new(llm),
        exporter,
        actions: ActionGuard::new(),
        render_defaults: config.render_defaults,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "resume-builder-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
