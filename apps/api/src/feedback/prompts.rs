// Interview feedback prompt. The section headings and score-line format below are
// exactly what `feedback::extractor` searches for; keep the two in step.

use crate::profiles::{ModelTier, PromptProfile};

pub const INTERVIEW_FEEDBACK: PromptProfile = PromptProfile {
    name: "interview_feedback",
    tier: ModelTier::Chat,
    template: INTERVIEW_FEEDBACK_TEMPLATE,
};

/// Replace `{answers}` before sending.
const INTERVIEW_FEEDBACK_TEMPLATE: &str = r#"You are an expert interviewer providing feedback on a candidate's responses.

Here are the interview questions and the candidate's answers:

{answers}

Your task is to:
- Score the answers as a whole for Quality, Clarity and Relevance, each out of 10.
- Summarize the candidate's overall performance.
- Give numbered, actionable steps the candidate can take to improve.
- Decide whether the candidate would pass this interview.

Judge critically: the scores should be genuine, not inflated.

Use EXACTLY the following format, with these headings in this order and nothing before the first line:

Quality: [integer 0-10]/10
Clarity: [integer 0-10]/10
Relevance: [integer 0-10]/10

Performance Summary:
[One or two paragraphs summarizing the overall performance.]

Actionable Steps for Improvement:
1. [Step 1]
2. [Step 2]
3. [Step 3]
[Additional numbered steps as needed]

Interview Result: [Yes or No]"#;
