//! Answer Evaluation — pluggable, trait-based evaluator for candidate answers.
//!
//! Default when no API key is configured: `HeuristicEvaluator` (pure-Rust,
//! fast, deterministic, fully testable).
//! With a key: `LlmEvaluator`, which degrades to the heuristic on any
//! provider failure so the endpoint always answers.
//!
//! `AppState` holds an `Arc<dyn AnswerEvaluator>`, chosen at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::evaluation::heuristics;
use crate::evaluation::prompts::{EVAL_PROMPT_TEMPLATE, EVAL_SYSTEM};
use crate::llm_client::LlmClient;

/// One evaluated answer: 1–5 score, one-line summary, one improvement
/// suggestion. This is also the response body of POST /evaluate-answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: u8,
    pub summary: String,
    pub improvement: String,
}

/// The evaluator trait. Implement this to swap backends without touching
/// the endpoint, handler, or ranking code.
#[async_trait]
pub trait AnswerEvaluator: Send + Sync {
    async fn evaluate(&self, answer: &str) -> Result<Evaluation, AppError>;
}

/// Strips an optional leading "Candidate says:" prefix (case-insensitive)
/// and surrounding whitespace. Clients paste answers in both forms.
pub fn normalize_answer(raw: &str) -> &str {
    const PREFIX: &str = "candidate says:";
    let text = raw.trim();
    if text.len() >= PREFIX.len()
        && text.is_char_boundary(PREFIX.len())
        && text[..PREFIX.len()].eq_ignore_ascii_case(PREFIX)
    {
        text[PREFIX.len()..].trim()
    } else {
        text
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicEvaluator
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic evaluator with no network dependency.
pub struct HeuristicEvaluator;

#[async_trait]
impl AnswerEvaluator for HeuristicEvaluator {
    async fn evaluate(&self, answer: &str) -> Result<Evaluation, AppError> {
        Ok(heuristics::score_answer(normalize_answer(answer)))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmEvaluator
// ────────────────────────────────────────────────────────────────────────────

/// LLM-backed evaluator. Any provider failure (transport, exhausted retries,
/// unparseable output) degrades to the heuristic result for the same answer,
/// so screening keeps working through provider outages.
pub struct LlmEvaluator {
    llm: LlmClient,
}

impl LlmEvaluator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

/// Raw model output before score clamping. The prompt demands 1–5 but models
/// occasionally return out-of-range or missing fields.
#[derive(Debug, Deserialize)]
struct RawEvaluation {
    #[serde(default = "default_score")]
    score: i64,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    improvement: String,
}

fn default_score() -> i64 {
    1
}

impl RawEvaluation {
    fn clamped(self) -> Evaluation {
        Evaluation {
            score: self.score.clamp(1, 5) as u8,
            summary: self.summary.trim().to_string(),
            improvement: self.improvement.trim().to_string(),
        }
    }
}

#[async_trait]
impl AnswerEvaluator for LlmEvaluator {
    async fn evaluate(&self, answer: &str) -> Result<Evaluation, AppError> {
        let answer = normalize_answer(answer);
        let prompt = EVAL_PROMPT_TEMPLATE.replace("{answer}", answer);

        match self.llm.call_json::<RawEvaluation>(&prompt, EVAL_SYSTEM).await {
            Ok(raw) => Ok(raw.clamped()),
            Err(e) => {
                warn!("LLM evaluation failed, degrading to heuristic: {e}");
                Ok(heuristics::score_answer(answer))
            }
        }
    }
}
