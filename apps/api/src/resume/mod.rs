// Resume analysis against a target job role.

pub mod handlers;
pub mod prompts;
