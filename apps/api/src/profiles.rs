//! Prompt profiles — the one parameterized configuration every endpoint runs through.
//!
//! A profile pairs a model tier with a prompt template. Feature modules declare their
//! profile in their own `prompts.rs`; handlers hand it to `run_profile` with the
//! values for its `{placeholder}` slots.

use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::prompts::fill_template;
use crate::state::AppState;

/// Which configured Gemini model a profile runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Long-document analysis (resume review).
    Analysis,
    /// Conversational and short-form generation.
    Chat,
}

impl ModelTier {
    pub fn model<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            ModelTier::Analysis => &config.analysis_model,
            ModelTier::Chat => &config.chat_model,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PromptProfile {
    pub name: &'static str,
    pub tier: ModelTier,
    pub template: &'static str,
}

impl PromptProfile {
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        fill_template(self.template, vars)
    }
}

/// Renders `profile`, sends it to the configured model, and returns the model text.
pub async fn run_profile(
    state: &AppState,
    profile: &PromptProfile,
    vars: &[(&str, &str)],
) -> Result<String, AppError> {
    let prompt = profile.render(vars);
    let model = profile.tier.model(&state.config);

    info!(
        "Running prompt profile '{}' on {} ({} chars)",
        profile.name,
        model,
        prompt.len()
    );

    state
        .llm
        .generate(model, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("{} generation failed: {e}", profile.name)))
}
