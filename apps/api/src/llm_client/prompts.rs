// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Opening line for every prompt spoken in the assistant's own voice.
pub const CYPHER_PERSONA: &str =
    "You are CypherAI, an advanced interview preparation assistant.";

/// Appended to prompts that answer the user directly.
pub const SUPPORTIVE_TONE: &str = "\
    Always maintain a professional, supportive, and encouraging tone. \
    Aim to boost the user's confidence and help them feel well-prepared for their interview.";

/// Guards resume prompts against arbitrary uploads.
pub const NOT_A_RESUME_CHECK: &str = "\
    Check properly if the content does not appear to be a resume, and please indicate \
    this in the output.";

/// Fills every `{key}` slot in `template` with its value in a single pass,
/// so braces inside substituted user text are never expanded again.
/// Unknown slots are left as written.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let slot = after
            .find('}')
            .map(|close| &after[..close])
            .and_then(|key| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| (key, *v)));

        match slot {
            Some((key, value)) => {
                out.push_str(value);
                rest = &after[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
