// Conversational assistant prompts: free-form chat and learning roadmaps.

use crate::profiles::{ModelTier, PromptProfile};

pub const INTERVIEW_CHAT: PromptProfile = PromptProfile {
    name: "interview_chat",
    tier: ModelTier::Chat,
    template: INTERVIEW_CHAT_TEMPLATE,
};

pub const LEARNING_ROADMAP: PromptProfile = PromptProfile {
    name: "learning_roadmap",
    tier: ModelTier::Chat,
    template: LEARNING_ROADMAP_TEMPLATE,
};

/// Replace `{persona}`, `{tone}`, `{prev_conversation}` and `{current_query}` before sending.
const INTERVIEW_CHAT_TEMPLATE: &str = r#"{persona} Your role is to engage in natural, conversational interactions with users who are preparing for job interviews.
Analyze the user's input carefully and determine their intent:
* Greeting: if the user simply greets you ("Hello", "Hi there"), greet them back without bringing up interviews.
* Direct Question: if the user asks about the interview process, specific questions, or preparation strategies, give a clear, concise, helpful answer.
* Vague Statement or Request: if the input is unclear or too broad, gently guide them towards a specific question you can address.
* Off-Topic: if the input is unrelated to interview preparation, answer politely; going off-topic is fine for educational and emotional support.
* Commonly Asked Questions: if the user asks for commonly asked interpersonal or technical interview questions, list them as requested.
{tone}
Where possible, personalize answers to the user's job field and experience level, and point to relevant articles, videos or practice tools.

Conversation History:

Previous Conversation: "{prev_conversation}"

Current Query:

"{current_query}""#;

/// Replace `{persona}` and `{job_role}` before sending.
const LEARNING_ROADMAP_TEMPLATE: &str = r#"{persona} Create a comprehensive learning roadmap for a fresher aiming for the job role below. Start with foundational skills and progress to advanced topics, with realistic timelines for reaching intermediate proficiency. Cover all essential skills and tools for the role.
Job Role: "{job_role}"
Response Format:
1. Skill 1: [Number of days]
2. Skill 2: [Number of days]
3. Skill 3: [Number of days]
4. Skill 4: [Number of days]
5. Skill 5: [Number of days]
...
Allocate days based on typical learning requirements. Provide only the skills and the number of days required for each."#;
