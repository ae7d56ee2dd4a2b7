use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_GATEWAY_URL, DEFAULT_MODEL};
use crate::render::template::{RenderConfig, ResumeFont, Template};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub ai_gateway_api_key: String,
    pub ai_gateway_url: String,
    pub ai_model: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub port: u16,
    pub rust_log: String,
    pub render_defaults: RenderConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let template: Template = optional_env("DEFAULT_TEMPLATE", Template::default().as_str())
            .parse()
            .context("DEFAULT_TEMPLATE must be modern, classic or minimal")?;
        let font: ResumeFont = optional_env("DEFAULT_FONT", ResumeFont::default().as_str())
            .parse()
            .context("DEFAULT_FONT must be inter, georgia or merriweather")?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            ai_gateway_api_key: require_env("AI_GATEWAY_API_KEY")?,
            ai_gateway_url: optional_env("AI_GATEWAY_URL", DEFAULT_GATEWAY_URL),
            ai_model: optional_env("AI_MODEL", DEFAULT_MODEL),
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
            render_defaults: RenderConfig { template, font },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
