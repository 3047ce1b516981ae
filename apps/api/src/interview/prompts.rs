// Mock interview question generation.

use crate::profiles::{ModelTier, PromptProfile};

pub const INTERVIEW_QUESTIONS: PromptProfile = PromptProfile {
    name: "interview_questions",
    tier: ModelTier::Chat,
    template: INTERVIEW_QUESTIONS_TEMPLATE,
};

/// Replace `{resume}`, `{job_role}` and `{interview_type}` before sending.
const INTERVIEW_QUESTIONS_TEMPLATE: &str = r#"You are conducting an interview. Provide 10 relevant questions for the interview type below (HR or Technical).

Here is the candidate's resume and job role:

Resume: {resume}
Job Role: {job_role}
Interview Type: {interview_type} Interview

Provide 10 relevant interview questions. Do not write a single word other than the questions: no heading, no numbering commentary. The first question is almost always "Tell me something about yourself".

Output Format:
- 10 interview questions"#;
