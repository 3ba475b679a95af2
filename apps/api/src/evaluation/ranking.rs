//! Candidate ranking — evaluates a batch of answers concurrently and orders
//! the results best-first.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::evaluator::AnswerEvaluator;

/// One candidate submitted for ranking. `id` is optional; a UUID is assigned
/// when missing so callers can always correlate results.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateIn {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
}

/// A candidate with its evaluation, as returned by POST /rank-candidates.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub id: String,
    pub text: String,
    pub score: u8,
    pub summary: String,
    pub improvement: String,
}

/// Evaluates all candidates concurrently and sorts by score descending.
/// Ties break toward the longer summary, which loosely favors richer answers.
pub async fn rank_candidates(
    evaluator: &dyn AnswerEvaluator,
    candidates: Vec<CandidateIn>,
) -> Result<Vec<RankedCandidate>, AppError> {
    let evaluations = join_all(candidates.iter().map(|c| evaluator.evaluate(&c.text))).await;

    let mut ranked = Vec::with_capacity(candidates.len());
    for (candidate, evaluation) in candidates.into_iter().zip(evaluations) {
        let evaluation = evaluation?;
        ranked.push(RankedCandidate {
            id: candidate
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            text: candidate.text,
            score: evaluation.score,
            summary: evaluation.summary,
            improvement: evaluation.improvement,
        });
    }

    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.summary.len().cmp(&a.summary.len()))
    });

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::evaluator::HeuristicEvaluator;

    fn candidate(id: &str, text: &str) -> CandidateIn {
        CandidateIn {
            id: Some(id.to_string()),
            text: text.to_string(),
        }
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[tokio::test]
    async fn test_ranking_orders_by_score_descending() {
        // 50 words + key term → 4; 25 words → 3; 5 words → 1
        let strong = format!("Design matters here. {}", words(47));
        let candidates = vec![
            candidate("weak", "too short"),
            candidate("strong", &strong),
            candidate("mid", &words(25)),
        ];

        let ranked = rank_candidates(&HeuristicEvaluator, candidates)
            .await
            .unwrap();

        let ids: Vec<&str> = ranked.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["strong", "mid", "weak"]);
        assert!(ranked[0].score >= ranked[1].score);
        assert!(ranked[1].score >= ranked[2].score);
    }

    #[tokio::test]
    async fn test_ranking_tie_breaks_on_longer_summary() {
        // Equal scores (both 25 words → 3); summaries differ in length.
        let short_summary = format!("Brief. {}", words(24));
        let long_summary = format!("This first sentence is considerably longer than brief. {}", words(17));
        let candidates = vec![
            candidate("short", &short_summary),
            candidate("long", &long_summary),
        ];

        let ranked = rank_candidates(&HeuristicEvaluator, candidates)
            .await
            .unwrap();

        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].id, "long");
    }

    #[tokio::test]
    async fn test_missing_id_gets_uuid_backfilled() {
        let candidates = vec![CandidateIn {
            id: None,
            text: "some answer".to_string(),
        }];

        let ranked = rank_candidates(&HeuristicEvaluator, candidates)
            .await
            .unwrap();

        assert!(Uuid::parse_str(&ranked[0].id).is_ok());
    }

    #[tokio::test]
    async fn test_original_text_is_preserved_unnormalized() {
        let candidates = vec![candidate("c1", "Candidate says: I would use queues")];

        let ranked = rank_candidates(&HeuristicEvaluator, candidates)
            .await
            .unwrap();

        assert_eq!(ranked[0].text, "Candidate says: I would use queues");
    }
}
