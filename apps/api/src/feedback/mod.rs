// Interview feedback: prompt the model for a templated report, then scrape it
// into a structured record.

pub mod extractor;
pub mod handlers;
pub mod prompts;
