pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use serde::Serialize;

use crate::assistant::handlers as assistant;
use crate::feedback::handlers as feedback;
use crate::interview::handlers as interview;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// `{"text": ...}` body shared by the endpoints that relay model text as-is.
#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/upload-file", post(resume::handle_upload_file))
        .route("/generate-content", post(assistant::handle_generate_content))
        .route("/generate-roadmap", post(assistant::handle_generate_roadmap))
        .route("/conduct-interview", post(interview::handle_conduct_interview))
        .route("/get-feedback", post(feedback::handle_get_feedback))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{test_config, Config};
    use crate::llm_client::{LlmError, TextGenerator};

    const REPORT: &str = "**Quality:** 6/10\n**Clarity:** 9/10\n**Relevance:** 7/10\n\n\
        ## Performance Summary:\nClear and well structured.\n\n\
        ## Actionable Steps for Improvement:\n1. Give concrete metrics\n2. Slow down\n\n\
        **Interview Result:** Yes";

    /// Returns a fixed reply and records every (model, prompt) it was asked for.
    struct CannedGenerator {
        reply: Option<String>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl CannedGenerator {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((model.to_string(), prompt.to_string()));
            self.reply.clone().ok_or(LlmError::EmptyContent)
        }
    }

    fn app(generator: Arc<CannedGenerator>) -> Router {
        app_with(generator, test_config())
    }

    fn app_with(generator: Arc<CannedGenerator>, config: Config) -> Router {
        build_router(AppState {
            llm: generator,
            config,
        })
    }

    /// `echo` stands in for tesseract, so OCR "reads" the arguments it was given.
    fn echo_ocr_config() -> Config {
        Config {
            tesseract_bin: "/bin/echo".to_string(),
            ocr_timeout_secs: 5,
            ..test_config()
        }
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_multipart(uri: &str, parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        let boundary = "cypher-test-boundary";
        let mut body = String::new();
        for (name, content_type, value) in parts {
            body.push_str(&format!("--{boundary}\r\n"));
            match content_type {
                Some(ct) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{name}.bin\"\r\n\
                     Content-Type: {ct}\r\n\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )),
            }
            body.push_str(value);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{boundary}--\r\n"));

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(CannedGenerator::replying(""))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "cypher-api");
    }

    #[tokio::test]
    async fn test_get_feedback_extracts_record() {
        let generator = CannedGenerator::replying(REPORT);
        let response = app(generator.clone())
            .oneshot(post_json(
                "/get-feedback",
                json!({"answers": {
                    "Tell me about yourself": "I maintain a payments API.",
                    "Biggest failure?": "A botched migration; I wrote the runbook after."
                }}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["feedback"], REPORT);
        assert_eq!(body["available"], true);
        assert_eq!(
            body["record"],
            json!({
                "quality": 6,
                "clarity": 9,
                "relevance": 7,
                "performanceSummary": "Clear and well structured.",
                "recommendations": ["Give concrete metrics", "Slow down"],
                "interviewResult": "Yes"
            })
        );

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "gemini-pro");
        assert!(calls[0].1.contains(
            "Question: Tell me about yourself\nAnswer: I maintain a payments API.\n\n\
             Question: Biggest failure?"
        ));
    }

    #[tokio::test]
    async fn test_get_feedback_unstructured_report_is_unavailable() {
        let response = app(CannedGenerator::replying("I cannot evaluate these answers."))
            .oneshot(post_json("/get-feedback", json!({"answers": {"Q": "A"}})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["available"], false);
        assert_eq!(body["record"], json!({}));
    }

    #[tokio::test]
    async fn test_get_feedback_requires_answers() {
        for payload in [json!({}), json!({"answers": {}})] {
            let generator = CannedGenerator::replying(REPORT);
            let response = app(generator.clone())
                .oneshot(post_json("/get-feedback", payload))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = json_body(response).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
            assert_eq!(body["error"]["message"], "No answers provided.");
            assert!(generator.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_generate_content_rejects_blank_query() {
        let response = app(CannedGenerator::replying("hi"))
            .oneshot(post_json("/generate-content", json!({"currentQuery": "   "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_content_relays_text() {
        let generator = CannedGenerator::replying("Hello! How can I help you prepare?");
        let response = app(generator.clone())
            .oneshot(post_json(
                "/generate-content",
                json!({"currentQuery": "Hi", "prevConversation": "none yet"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body, json!({"text": "Hello! How can I help you prepare?"}));
        assert!(generator.calls()[0].1.contains("Previous Conversation: \"none yet\""));
    }

    #[tokio::test]
    async fn test_generate_roadmap_uses_job_role() {
        let generator = CannedGenerator::replying("1. Linux: 14 days");
        let response = app(generator.clone())
            .oneshot(post_json(
                "/generate-roadmap",
                json!({"currentQuery": "DevOps Engineer"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["text"], "1. Linux: 14 days");
        assert!(generator.calls()[0].1.contains("Job Role: \"DevOps Engineer\""));
    }

    #[tokio::test]
    async fn test_llm_failure_is_generic_server_error() {
        let response = app(CannedGenerator::failing())
            .oneshot(post_json(
                "/generate-roadmap",
                json!({"currentQuery": "Data Analyst"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        assert_eq!(body["error"]["message"], "Error generating content");
    }

    #[tokio::test]
    async fn test_upload_without_file_is_rejected() {
        let generator = CannedGenerator::replying("analysis");
        let response = app(generator.clone())
            .oneshot(post_multipart(
                "/upload-file",
                &[("jobRole", None, "Backend Engineer")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["message"],
            "No file was uploaded."
        );
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_conduct_interview_rejects_unsupported_type() {
        let response = app(CannedGenerator::replying("questions"))
            .oneshot(post_multipart(
                "/conduct-interview",
                &[
                    ("resume", Some("text/plain"), "plain text resume"),
                    ("jobRole", None, "QA Engineer"),
                    ("interviewType", None, "HR"),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["message"],
            "Unsupported file type."
        );
    }

    #[tokio::test]
    async fn test_upload_file_analyzes_image_resume() {
        let generator = CannedGenerator::replying("Strong backend profile.");
        let response = app_with(generator.clone(), echo_ocr_config())
            .oneshot(post_multipart(
                "/upload-file",
                &[
                    ("file", Some("image/png"), "png-bytes"),
                    ("jobRole", None, "Backend Engineer"),
                ],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("application/json"));
        assert_eq!(
            json_body(response).await,
            json!({"text": "Strong backend profile."})
        );

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "gemini-1.5-flash");
        assert!(calls[0].1.contains("\"Backend Engineer\""));
        assert!(calls[0].1.contains(".png stdout -l eng"));
    }

    #[tokio::test]
    async fn test_conduct_interview_returns_plain_text_questions() {
        let questions = "1. Why QA?\n2. Describe a bug you are proud of finding.";
        let generator = CannedGenerator::replying(questions);
        let response = app_with(generator.clone(), echo_ocr_config())
            .oneshot(post_multipart(
                "/conduct-interview",
                &[
                    ("resume", Some("image/png"), "png-bytes"),
                    ("jobRole", None, "QA Engineer"),
                    ("interviewType", None, "HR"),
                ],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), questions);

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "gemini-pro");
        let prompt = &calls[0].1;
        assert!(prompt.contains("Job Role: QA Engineer"));
        assert!(prompt.contains("Interview Type: HR Interview"));
        assert!(prompt.contains(".png stdout -l eng"));
    }

    #[tokio::test]
    async fn test_unreadable_upload_is_unprocessable() {
        let generator = CannedGenerator::replying("analysis");
        let config = Config {
            tesseract_bin: "/bin/false".to_string(),
            ..echo_ocr_config()
        };
        let response = app_with(generator.clone(), config)
            .oneshot(post_multipart(
                "/upload-file",
                &[("file", Some("image/jpeg"), "jpeg-bytes")],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json_body(response).await["error"]["code"],
            "EXTRACTION_ERROR"
        );
        assert!(generator.calls().is_empty());
    }
}
