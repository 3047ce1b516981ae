//! Axum route handler for interview feedback.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::feedback::extractor::{extract, FeedbackRecord};
use crate::feedback::prompts::INTERVIEW_FEEDBACK;
use crate::profiles::run_profile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    /// Question → answer, in the order the client sent them.
    #[serde(default)]
    pub answers: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    /// Raw model report, passed through untouched.
    pub feedback: String,
    /// False when nothing could be extracted; clients show "feedback unavailable".
    pub available: bool,
    pub record: FeedbackRecord,
}

/// POST /get-feedback
pub async fn handle_get_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let answers = request
        .answers
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::Validation("No answers provided.".to_string()))?;

    let transcript = format_answers(&answers);
    let feedback = run_profile(
        &state,
        &INTERVIEW_FEEDBACK,
        &[("answers", transcript.as_str())],
    )
    .await?;

    let record = extract(&feedback);
    let available = !record.is_empty();
    if available {
        info!(
            "Feedback extracted for {} answers (scores: {}, {} recommendations)",
            answers.len(),
            record.has_scores(),
            record.recommendations.len()
        );
    } else {
        warn!("Feedback report matched no known sections");
    }

    Ok(Json(FeedbackResponse {
        feedback,
        available,
        record,
    }))
}

/// `Question: ..\nAnswer: ..` blocks separated by blank lines.
fn format_answers(answers: &Map<String, Value>) -> String {
    answers
        .iter()
        .map(|(question, answer)| {
            let answer = match answer {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            format!("Question: {question}\nAnswer: {answer}")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_answers_keeps_order() {
        let answers = json!({
            "Tell me about yourself": "I build APIs.",
            "Why this role?": "I like distributed systems.",
            "Years of Rust?": 3
        });
        let formatted = format_answers(answers.as_object().unwrap());
        assert_eq!(
            formatted,
            "Question: Tell me about yourself\nAnswer: I build APIs.\n\n\
             Question: Why this role?\nAnswer: I like distributed systems.\n\n\
             Question: Years of Rust?\nAnswer: 3"
        );
    }

    #[test]
    fn test_format_answers_null_is_blank() {
        let answers = json!({"Q": null});
        assert_eq!(format_answers(answers.as_object().unwrap()), "Question: Q\nAnswer: ");
    }

    #[test]
    fn test_response_serializes_record_inline() {
        let response = FeedbackResponse {
            feedback: "Interview Result: No".to_string(),
            available: true,
            record: extract("Interview Result: No"),
        };
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["available"], true);
        assert_eq!(value["record"], json!({"interviewResult": "No"}));
    }
}
