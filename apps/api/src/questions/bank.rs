//! Deterministic question templates used when no LLM is configured and to
//! top up short LLM output.

/// Role-parameterized templates. `{skill}` falls back to "your main skill"
/// when the request names none.
const TEMPLATES: [&str; 8] = [
    "Describe a challenging {skill} problem you solved as a {role}. What made it hard?",
    "How do you approach testing and verifying your work as a {role}?",
    "Walk through a design decision you made involving {skill} and the trade-offs you weighed.",
    "Tell us about a time something you built as a {role} failed in production. What did you change?",
    "How would you explain a complex {skill} concept to a non-technical stakeholder?",
    "What do you measure to know your work as a {role} is performing well?",
    "Describe how you handle disagreement on a technical direction within your team.",
    "If you joined us tomorrow as a {role}, what would you want to learn in the first month?",
];

/// Returns exactly `count` questions, cycling templates when `count` exceeds
/// the bank. Deterministic for a given (role, skill, count).
pub fn template_questions(role: &str, skill: Option<&str>, count: usize) -> Vec<String> {
    let skill = skill.unwrap_or("your main skill");
    TEMPLATES
        .iter()
        .cycle()
        .take(count)
        .map(|t| t.replace("{role}", role).replace("{skill}", skill))
        .collect()
}
