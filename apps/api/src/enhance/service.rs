//! One enhancement round trip: validate → prompts → generator → normalize.

use tracing::{info, warn};

use crate::enhance::normalize::{normalize_response, EnhanceResult};
use crate::enhance::request::EnhanceRequest;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Runs a single enhancement request against the text generator.
///
/// Generator failures map onto `RateLimited`, `QuotaExceeded` or `Upstream`.
/// Malformed model output is not an error; it degrades to the per-kind fallback.
pub async fn run_enhancement(
    ai: &dyn TextGenerator,
    request: &EnhanceRequest,
) -> Result<EnhanceResult, AppError> {
    request.validate()?;

    let kind = request.kind();
    let prompts = request.build_prompts();
    info!("Running AI enhancement: {}", kind.as_str());

    let raw = ai.complete(&prompts.system, &prompts.user).await?;
    let result = normalize_response(kind, &raw);

    if result.is_fallback(&raw) {
        warn!(
            "AI response for {} had no parseable JSON object; using fallback",
            kind.as_str()
        );
    }

    Ok(result)
}
