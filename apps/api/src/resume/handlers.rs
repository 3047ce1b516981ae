//! Axum route handler for resume analysis.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::documents::{extract_text, read_upload};
use crate::errors::AppError;
use crate::llm_client::prompts::NOT_A_RESUME_CHECK;
use crate::profiles::run_profile;
use crate::resume::prompts::RESUME_ANALYSIS;
use crate::routes::TextResponse;
use crate::state::AppState;

/// POST /upload-file
///
/// Multipart: `file` (PDF, JPEG or PNG) and optional `jobRole`.
pub async fn handle_upload_file(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TextResponse>, AppError> {
    let upload = read_upload(multipart, "file").await?;
    let (kind, file) = upload.document()?;
    let resume = extract_text(kind, file.bytes.clone(), &state.config).await?;

    let text = run_profile(
        &state,
        &RESUME_ANALYSIS,
        &[
            ("resume", resume.as_str()),
            ("job_role", upload.field("jobRole")),
            ("not_a_resume_check", NOT_A_RESUME_CHECK),
        ],
    )
    .await?;

    Ok(Json(TextResponse { text }))
}
