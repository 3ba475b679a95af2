// All LLM prompt constants for the Evaluation module.
// The JSON-only instruction is appended by LlmClient::call_json.

/// System prompt for answer evaluation.
pub const EVAL_SYSTEM: &str = "You are an expert hiring screener evaluating \
    a candidate's short interview answer.";

/// Evaluation prompt template. Replace `{answer}` before sending.
pub const EVAL_PROMPT_TEMPLATE: &str = r#"Evaluate the candidate's short answer and return STRICT JSON (no extra commentary).

Return a JSON object with EXACTLY three fields:
{
  "score": 3,
  "summary": "one-line concise summary (<= 20 words)",
  "improvement": "one short suggestion (<= 25 words)"
}

Scoring rubric (score is an integer 1-5, 5 best):
5: Correct, complete, concise, shows depth or example.
4: Mostly correct, minor missing detail.
3: Partially correct or incomplete.
2: Poor, big gaps.
1: Incorrect/irrelevant.

Candidate says:
"""{answer}"""

Return JSON only."#;
