//! Axum route handler for mock interview questions.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
};

use crate::documents::{extract_text, read_upload};
use crate::errors::AppError;
use crate::interview::prompts::INTERVIEW_QUESTIONS;
use crate::profiles::run_profile;
use crate::state::AppState;

/// POST /conduct-interview
///
/// Multipart: `resume` (PDF, JPEG or PNG), optional `jobRole` and `interviewType`.
/// Responds with the questions as plain text, one per line as the model wrote them.
pub async fn handle_conduct_interview(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_upload(multipart, "resume").await?;
    let (kind, file) = upload.document()?;
    let resume = extract_text(kind, file.bytes.clone(), &state.config).await?;

    let questions = run_profile(
        &state,
        &INTERVIEW_QUESTIONS,
        &[
            ("resume", resume.as_str()),
            ("job_role", upload.field("jobRole")),
            ("interview_type", upload.field("interviewType")),
        ],
    )
    .await?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        questions,
    ))
}
