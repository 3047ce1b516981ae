//! Axum route handlers for the conversational assistant.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::assistant::prompts::{INTERVIEW_CHAT, LEARNING_ROADMAP};
use crate::errors::AppError;
use crate::llm_client::prompts::{CYPHER_PERSONA, SUPPORTIVE_TONE};
use crate::profiles::run_profile;
use crate::routes::TextResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub current_query: String,
    #[serde(default)]
    pub prev_conversation: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    /// The target job role.
    #[serde(default)]
    pub current_query: String,
}

/// POST /generate-content
pub async fn handle_generate_content(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<TextResponse>, AppError> {
    if request.current_query.trim().is_empty() {
        return Err(AppError::Validation("currentQuery cannot be empty".to_string()));
    }

    let text = run_profile(
        &state,
        &INTERVIEW_CHAT,
        &[
            ("persona", CYPHER_PERSONA),
            ("tone", SUPPORTIVE_TONE),
            ("prev_conversation", request.prev_conversation.as_str()),
            ("current_query", request.current_query.as_str()),
        ],
    )
    .await?;

    Ok(Json(TextResponse { text }))
}

/// POST /generate-roadmap
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let job_role = request.current_query.trim();
    if job_role.is_empty() {
        return Err(AppError::Validation(
            "currentQuery (job role) cannot be empty".to_string(),
        ));
    }

    let text = run_profile(
        &state,
        &LEARNING_ROADMAP,
        &[("persona", CYPHER_PERSONA), ("job_role", job_role)],
    )
    .await?;

    Ok(Json(TextResponse { text }))
}
