// Interview-prep chat and learning roadmaps.

pub mod handlers;
pub mod prompts;
