// Resume analysis prompt.

use crate::profiles::{ModelTier, PromptProfile};

pub const RESUME_ANALYSIS: PromptProfile = PromptProfile {
    name: "resume_analysis",
    tier: ModelTier::Analysis,
    template: RESUME_ANALYSIS_TEMPLATE,
};

/// Replace `{resume}`, `{job_role}` and `{not_a_resume_check}` before sending.
const RESUME_ANALYSIS_TEMPLATE: &str = r#"This is my resume: "{resume}". I am aiming for the job role "{job_role}".

Analyze this resume in the context of the specified job role, giving both individual metrics and a comprehensive assessment of its strengths and weaknesses.
Analyze very critically. Do not cluster every score around 80-90: a resume that does not align with the role must score low. The scores must be genuine.

Assessment Criteria:

1. ATS Compatibility:
    - Adherence to ATS standards: keyword optimization, formatting and structure.

2. Content and Relevance:
    - Alignment between the resume's skills, experience and education and the requirements of the job role.

3. Structure and Formatting:
    - Overall organization and readability; clarity and conciseness of section headings and bullet points.

4. Strengths:
    - The most compelling aspects that match the job requirements (quantifiable achievements, relevant skills, strong experience).
    - Skills, projects and responsibilities that directly relate to the role.

5. Areas of Improvement:
    - Missing skills, experiences or qualifications that matter for the role, and how to close the gap.
    - Targeted advice: rephrasing, specific details to add, experiences to highlight. Only the text of the resume is available to you, so original spacing and layout cannot be judged.

Output Format:

ATS Compatibility Score (in %): between 0 and 80. (provide only score)
Content Relevance Score (in %): between 0 and 90. (provide only score)
Structure and Formatting Score (in %): between 0 and 90. (provide only score)
Overall Resume Score (in %): between 0 and 80. (provide only score)
Strengths: the resume's top strengths, with specific examples from the resume.
Areas for Improvement: actionable suggestions for each area, naming any grammatical errors or other faults.

Important: {not_a_resume_check} Make the analysis comprehensive, actionable, and tailored to the job role provided."#;
