// Mock interviews: questions generated from the candidate's resume.

pub mod handlers;
pub mod prompts;
