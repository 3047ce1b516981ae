use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_ANALYSIS_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_CHAT_MODEL: &str = "gemini-pro";
const DEFAULT_CORS_ORIGINS: &str = "https://cypher-ai.vercel.app,http://localhost:3000";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_OCR_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    /// Model used for resume analysis.
    pub analysis_model: String,
    /// Model used for chat, roadmap, interview questions and feedback.
    pub chat_model: String,
    pub cors_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub tesseract_bin: String,
    /// Upper bound on one OCR run before the child process is killed.
    pub ocr_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: env_or("GEMINI_API_BASE", DEFAULT_API_BASE),
            analysis_model: env_or("GEMINI_ANALYSIS_MODEL", DEFAULT_ANALYSIS_MODEL),
            chat_model: env_or("GEMINI_CHAT_MODEL", DEFAULT_CHAT_MODEL),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
            max_upload_bytes: parse_number(
                "MAX_UPLOAD_BYTES",
                std::env::var("MAX_UPLOAD_BYTES").ok(),
                DEFAULT_MAX_UPLOAD_BYTES,
            )?,
            tesseract_bin: env_or("TESSERACT_BIN", "tesseract"),
            ocr_timeout_secs: parse_number(
                "OCR_TIMEOUT_SECS",
                std::env::var("OCR_TIMEOUT_SECS").ok(),
                DEFAULT_OCR_TIMEOUT_SECS,
            )?,
            port: parse_number("PORT", std::env::var("PORT").ok(), DEFAULT_PORT)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parses an optional numeric env value, falling back to `default` when unset.
fn parse_number<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{value}'")),
        None => Ok(default),
    }
}

/// Splits a comma-separated origin list, dropping blanks and trailing slashes.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        gemini_api_key: "test-key".to_string(),
        gemini_api_base: DEFAULT_API_BASE.to_string(),
        analysis_model: DEFAULT_ANALYSIS_MODEL.to_string(),
        chat_model: DEFAULT_CHAT_MODEL.to_string(),
        cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
        max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        tesseract_bin: "tesseract".to_string(),
        ocr_timeout_secs: DEFAULT_OCR_TIMEOUT_SECS,
        port: DEFAULT_PORT,
        rust_log: "debug".to_string(),
    }
}
