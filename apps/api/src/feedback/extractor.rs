//! Feedback Extractor — turns the model's free-text interview feedback report into a
//! structured `FeedbackRecord`.
//!
//! The report is only asked (by prompt) to follow the template in
//! `feedback::prompts`, so every rule here is independent and best-effort:
//! a rule that finds nothing leaves its field unset, it never fails the call.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Reports longer than this (in chars) are truncated before matching.
pub const MAX_REPORT_CHARS: usize = 32_768;

/// Quality, Clarity, Relevance in that order. Matches all three or nothing.
static SCORE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)Quality:\s*(\d+)/10.*?Clarity:\s*(\d+)/10.*?Relevance:\s*(\d+)/10")
        .expect("score block pattern is valid")
});

static PERFORMANCE_SUMMARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)Performance Summary:?(.*?)Actionable Steps for Improvement")
        .expect("summary pattern is valid")
});

static ACTIONABLE_STEPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)Actionable Steps for Improvement:?(.*?)Interview Result")
        .expect("recommendations pattern is valid")
});

static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\. ?(.*)$").expect("numbered item pattern is valid"));

static INTERVIEW_RESULT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Interview Result:[ \t]*(Yes|No)\b").expect("result pattern is valid")
});

/// Binary outcome line of the report. Serialized verbatim as `"Yes"` / `"No"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewResult {
    Yes,
    No,
}

/// Structured view of one feedback report. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clarity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_result: Option<InterviewResult>,
}

impl FeedbackRecord {
    /// True when nothing at all was recognized in the report.
    pub fn is_empty(&self) -> bool {
        !self.has_scores()
            && self.performance_summary.is_none()
            && self.recommendations.is_empty()
            && self.interview_result.is_none()
    }

    pub fn has_scores(&self) -> bool {
        self.quality.is_some() && self.clarity.is_some() && self.relevance.is_some()
    }
}

/// Extracts a best-effort `FeedbackRecord` from a report. Never fails.
pub fn extract(report: &str) -> FeedbackRecord {
    let text = normalize(truncate_chars(report, MAX_REPORT_CHARS));

    let mut record = FeedbackRecord {
        performance_summary: performance_summary(&text),
        recommendations: recommendations(&text),
        interview_result: interview_result(&text),
        ..FeedbackRecord::default()
    };

    if let Some((quality, clarity, relevance)) = scores(&text) {
        record.quality = Some(quality);
        record.clarity = Some(clarity);
        record.relevance = Some(relevance);
    }

    record
}

/// Drops `*` / `#` emphasis markers and surrounding whitespace.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '*' | '#'))
        .collect::<String>()
        .trim()
        .to_string()
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn scores(text: &str) -> Option<(u32, u32, u32)> {
    let caps = SCORE_BLOCK.captures(text)?;
    let quality = caps[1].parse().ok()?;
    let clarity = caps[2].parse().ok()?;
    let relevance = caps[3].parse().ok()?;
    Some((quality, clarity, relevance))
}

fn performance_summary(text: &str) -> Option<String> {
    PERFORMANCE_SUMMARY
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

fn recommendations(text: &str) -> Vec<String> {
    let Some(caps) = ACTIONABLE_STEPS.captures(text) else {
        return Vec::new();
    };

    caps[1]
        .lines()
        .filter_map(|line| {
            NUMBERED_ITEM
                .captures(line.trim())
                .map(|item| item[1].trim().to_string())
        })
        .filter(|item| !item.is_empty())
        .collect()
}

fn interview_result(text: &str) -> Option<InterviewResult> {
    let caps = INTERVIEW_RESULT.captures(text)?;
    match &caps[1] {
        "Yes" => Some(InterviewResult::Yes),
        "No" => Some(InterviewResult::No),
        _ => None,
    }
}
