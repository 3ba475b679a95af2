//! Heuristic answer scoring — the deterministic backend used when no LLM is
//! configured and as the degradation path when an LLM call fails.
//!
//! Scores on answer length and coverage of engineering key terms. The summary
//! is the answer's first sentence and the improvement suggestion is canned.
//! No network, no randomness, fully testable.

use crate::evaluation::evaluator::Evaluation;

/// Engineering vocabulary that signals a substantive answer. Matched
/// case-insensitively on whole words.
const KEY_TERMS: [&str; 12] = [
    "design",
    "trade-off",
    "complexity",
    "edge",
    "optimize",
    "test",
    "security",
    "performance",
    "scalability",
    "consistency",
    "retry",
    "idempotent",
];

const SUMMARY_WORD_LIMIT: usize = 20;

/// Scores an answer without an LLM.
///
/// Tiers:
/// - ≥80 words and ≥2 key terms → 5
/// - ≥50 words and ≥1 key term → 4
/// - ≥25 words → 3
/// - ≥10 words → 2
/// - otherwise → 1
pub fn score_answer(answer: &str) -> Evaluation {
    let text = answer.trim();
    if text.is_empty() {
        return Evaluation {
            score: 1,
            summary: "No answer provided.".to_string(),
            improvement: "Provide an answer with key ideas.".to_string(),
        };
    }

    let length = text.split_whitespace().count();
    let text_lower = text.to_lowercase();
    let keywords = KEY_TERMS
        .iter()
        .filter(|term| contains_word(&text_lower, term))
        .count();

    let score = if length >= 80 && keywords >= 2 {
        5
    } else if length >= 50 && keywords >= 1 {
        4
    } else if length >= 25 {
        3
    } else if length >= 10 {
        2
    } else {
        1
    };

    let improvement = if score < 4 {
        "Be more specific and mention trade-offs or testing."
    } else {
        "Add a concrete example or metrics."
    };

    Evaluation {
        score,
        summary: summarize(text),
        improvement: improvement.to_string(),
    }
}

/// First sentence of the answer, truncated to 20 words with a trailing
/// ellipsis when longer.
fn summarize(text: &str) -> String {
    let first_sentence = first_sentence(text);
    let words: Vec<&str> = first_sentence.split_whitespace().collect();
    if words.len() > SUMMARY_WORD_LIMIT {
        format!("{}...", words[..SUMMARY_WORD_LIMIT].join(" "))
    } else {
        words.join(" ")
    }
}

/// Splits at the first `.`, `!`, or `?` that is followed by whitespace.
/// Returns the whole text when no sentence boundary exists.
fn first_sentence(text: &str) -> &str {
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some((_, next)) = chars.peek() {
                if next.is_whitespace() {
                    return &text[..=i];
                }
            }
        }
    }
    text
}

/// Whole-word, case-insensitive match. `haystack` must already be lowercase.
/// Word characters are alphanumerics and underscore, so "trade-off" matches
/// inside "a trade-off here" but "test" matches neither "latest" nor
/// "test_suite".
fn contains_word(haystack: &str, term: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(term) {
        let start = from + pos;
        let end = start + term.len();

        let boundary_before = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let boundary_after = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));

        if boundary_before && boundary_after {
            return true;
        }
        from = end;
    }
    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_answer_scores_one_with_canned_strings() {
        let eval = score_answer("   ");
        assert_eq!(eval.score, 1);
        assert_eq!(eval.summary, "No answer provided.");
        assert_eq!(eval.improvement, "Provide an answer with key ideas.");
    }

    #[test]
    fn test_very_short_answer_scores_one() {
        let eval = score_answer("Yes, absolutely.");
        assert_eq!(eval.score, 1);
    }

    #[test]
    fn test_ten_words_scores_two() {
        let eval = score_answer(&words(10));
        assert_eq!(eval.score, 2);
    }

    #[test]
    fn test_twenty_five_words_scores_three() {
        let eval = score_answer(&words(25));
        assert_eq!(eval.score, 3);
    }

    #[test]
    fn test_fifty_words_with_one_key_term_scores_four() {
        let answer = format!("{} performance", words(49));
        let eval = score_answer(&answer);
        assert_eq!(eval.score, 4);
        assert_eq!(eval.improvement, "Add a concrete example or metrics.");
    }

    #[test]
    fn test_fifty_words_without_key_terms_scores_three() {
        let eval = score_answer(&words(50));
        assert_eq!(eval.score, 3);
        assert_eq!(
            eval.improvement,
            "Be more specific and mention trade-offs or testing."
        );
    }

    #[test]
    fn test_eighty_words_with_two_key_terms_scores_five() {
        let answer = format!("I would design for scalability. {}", words(75));
        let eval = score_answer(&answer);
        assert_eq!(eval.score, 5);
    }

    #[test]
    fn test_eighty_words_with_one_key_term_scores_four() {
        let answer = format!("I would focus on scalability. {}", words(75));
        let eval = score_answer(&answer);
        assert_eq!(eval.score, 4);
    }

    #[test]
    fn test_key_term_match_is_whole_word() {
        // "latest" must not count as "test"
        let answer = format!("{} latest", words(49));
        assert_eq!(score_answer(&answer).score, 3);
    }

    #[test]
    fn test_underscore_joined_term_does_not_count() {
        // "test_suite" is one word; it must not count as "test"
        let answer = format!("{} test_suite", words(49));
        assert_eq!(score_answer(&answer).score, 3);
    }

    #[test]
    fn test_key_term_match_is_case_insensitive() {
        let answer = format!("{} SECURITY", words(49));
        assert_eq!(score_answer(&answer).score, 4);
    }

    #[test]
    fn test_hyphenated_key_term_matches() {
        let answer = format!("{} trade-off", words(49));
        assert_eq!(score_answer(&answer).score, 4);
    }

    #[test]
    fn test_summary_is_first_sentence() {
        let eval = score_answer("I would shard the database. Then I would add queues.");
        assert_eq!(eval.summary, "I would shard the database.");
    }

    #[test]
    fn test_summary_truncated_to_twenty_words_with_ellipsis() {
        let long_sentence = format!("{} end", words(25));
        let eval = score_answer(&long_sentence);
        assert_eq!(eval.summary, format!("{}...", words(20)));
    }

    #[test]
    fn test_summary_without_sentence_boundary_uses_whole_text() {
        let eval = score_answer("sharding plus read replicas plus caching");
        assert_eq!(eval.summary, "sharding plus read replicas plus caching");
    }

    #[test]
    fn test_decimal_point_is_not_a_sentence_boundary() {
        let eval = score_answer("Latency dropped to 1.5 ms after tuning. Then we stopped.");
        assert_eq!(eval.summary, "Latency dropped to 1.5 ms after tuning.");
    }
}
