//! Question generation — LLM-backed with a deterministic template bank as
//! the fallback and top-up source.

pub mod bank;
pub mod handlers;
pub mod prompts;

use tracing::warn;

use crate::llm_client::LlmClient;
use crate::questions::prompts::{QUESTIONS_PROMPT_TEMPLATE, QUESTIONS_SYSTEM};

/// Generates `count` interview questions for a role, optionally focused on a
/// skill. `llm` is `None` in fallback mode. Returns the questions and the
/// provider label that actually produced them.
pub async fn generate_questions(
    llm: Option<&LlmClient>,
    role: &str,
    skill: Option<&str>,
    count: usize,
) -> (Vec<String>, &'static str) {
    let Some(llm) = llm else {
        return (bank::template_questions(role, skill, count), "fallback");
    };

    let prompt = build_prompt(role, skill, count);
    match llm.call_json::<Vec<String>>(&prompt, QUESTIONS_SYSTEM).await {
        Ok(generated) => (fit_to_count(generated, role, skill, count), "openai"),
        Err(e) => {
            warn!("LLM question generation failed, degrading to bank: {e}");
            (bank::template_questions(role, skill, count), "fallback")
        }
    }
}

fn build_prompt(role: &str, skill: Option<&str>, count: usize) -> String {
    let focus = match skill {
        Some(skill) => format!(" with a focus on {skill}"),
        None => String::new(),
    };
    QUESTIONS_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{role}", role)
        .replace("{focus}", &focus)
}

/// Normalizes model output to exactly `count` questions: blank entries are
/// dropped, overruns truncated, shortfalls topped up from the bank.
fn fit_to_count(
    generated: Vec<String>,
    role: &str,
    skill: Option<&str>,
    count: usize,
) -> Vec<String> {
    let mut questions: Vec<String> = generated
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .take(count)
        .collect();

    if questions.len() < count {
        let templates = bank::template_questions(role, skill, count);
        for template in &templates {
            if questions.len() == count {
                break;
            }
            if !questions.contains(template) {
                questions.push(template.clone());
            }
        }
        // Bank exhausted but still short: repeat templates rather than
        // return fewer than `count`.
        for template in templates.iter().cycle() {
            if questions.len() == count {
                break;
            }
            questions.push(template.clone());
        }
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_llm_uses_bank() {
        let (questions, provider) =
            generate_questions(None, "backend engineer", None, 5).await;
        assert_eq!(questions.len(), 5);
        assert_eq!(provider, "fallback");
    }

    #[test]
    fn test_fit_to_count_truncates_overruns() {
        let generated = (0..8).map(|i| format!("q{i}")).collect();
        let fitted = fit_to_count(generated, "engineer", None, 3);
        assert_eq!(fitted, vec!["q0", "q1", "q2"]);
    }

    #[test]
    fn test_fit_to_count_tops_up_shortfalls_from_bank() {
        let generated = vec!["only one".to_string()];
        let fitted = fit_to_count(generated, "engineer", None, 4);
        assert_eq!(fitted.len(), 4);
        assert_eq!(fitted[0], "only one");
    }

    #[test]
    fn test_fit_to_count_reaches_count_beyond_unique_bank() {
        // The bank has 8 unique templates; a full shortfall at count 10 must
        // still come back with 10 questions.
        let fitted = fit_to_count(Vec::new(), "engineer", None, 10);
        assert_eq!(fitted.len(), 10);
    }

    #[test]
    fn test_fit_to_count_drops_blank_entries() {
        let generated = vec!["  ".to_string(), "real question?".to_string()];
        let fitted = fit_to_count(generated, "engineer", None, 1);
        assert_eq!(fitted, vec!["real question?"]);
    }

    #[test]
    fn test_build_prompt_includes_skill_focus() {
        let prompt = build_prompt("data engineer", Some("SQL"), 3);
        assert!(prompt.contains("data engineer"));
        assert!(prompt.contains("with a focus on SQL"));
        assert!(prompt.contains('3'));
    }

    #[test]
    fn test_build_prompt_without_skill_has_no_focus_clause() {
        let prompt = build_prompt("data engineer", None, 3);
        assert!(!prompt.contains("with a focus on"));
    }
}
