// All LLM prompt constants for the Questions module.
// The JSON-only instruction is appended by LlmClient::call_json.

/// System prompt for question generation.
pub const QUESTIONS_SYSTEM: &str = "You are an expert technical interviewer \
    designing screening questions. Your output is a JSON array of strings.";

/// Question generation prompt template.
/// Replace `{count}`, `{role}`, and `{focus}` before sending.
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"Generate exactly {count} interview screening questions for a {role} position{focus}.

Rules:
- Each question must be open-ended and answerable in free text within a few minutes.
- Probe for depth: design decisions, trade-offs, failure stories, testing habits.
- No multiple choice, no yes/no questions, no brain teasers.
- One sentence per question where possible, two at most.

Return a JSON array of exactly {count} strings, nothing else:
["question one", "question two"]"#;
