mod openai;

pub use openai::OpenAiProvider;

use crate::config::{DanglingPolicy, OpenAiConfig};
use crate::error::ProviderError;
use crate::parser::{self, AnalysisOutcome};
use async_trait::async_trait;
use std::sync::Arc;

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// A chat model that turns a prompt into a free-text reply
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ProviderError>;
}

/// Create the chat provider from config and an API key
pub fn create_provider(
    config: &OpenAiConfig,
    api_key: Option<String>,
) -> Result<Arc<dyn ChatProvider>, ProviderError> {
    let api_key = api_key
        .filter(|k| !k.trim().is_empty())
        .ok_or(ProviderError::MissingCredential(OPENAI_API_KEY_ENV))?;
    Ok(Arc::new(OpenAiProvider::new(config.clone(), api_key)?))
}

/// Ask the provider for an analysis and structure the reply
///
/// Provider failures become [`AnalysisOutcome::Failed`]; a reply that does
/// not follow the template is still `Parsed`, just with fewer fields.
pub async fn analyze(
    provider: &dyn ChatProvider,
    system: &str,
    prompt: &str,
    policy: DanglingPolicy,
) -> AnalysisOutcome {
    tracing::info!("Requesting analysis from {}", provider.name());

    match provider.complete(system, prompt).await {
        Ok(raw_analysis) => {
            let structured = parser::structure(&raw_analysis, policy);
            AnalysisOutcome::Parsed {
                raw_analysis,
                structured,
            }
        }
        Err(e) => {
            tracing::error!("Error in sentiment analysis: {}", e);
            AnalysisOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}
