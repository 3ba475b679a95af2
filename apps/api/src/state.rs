use std::sync::Arc;

use crate::config::Config;
use crate::evaluation::evaluator::{AnswerEvaluator, HeuristicEvaluator, LlmEvaluator};
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable answer evaluator. Heuristic in fallback mode, LLM otherwise.
    pub evaluator: Arc<dyn AnswerEvaluator>,
    /// Present only when an API key is configured.
    pub llm: Option<LlmClient>,
}

impl AppState {
    /// Wires the evaluator and LLM client from config. Fallback mode carries
    /// no client at all, so nothing in the process can reach the network.
    pub fn from_config(config: Config) -> Self {
        let (llm, evaluator): (Option<LlmClient>, Arc<dyn AnswerEvaluator>) =
            if config.use_fallback {
                (None, Arc::new(HeuristicEvaluator))
            } else {
                let llm = LlmClient::new(&config);
                (Some(llm.clone()), Arc::new(LlmEvaluator::new(llm)))
            };

        Self {
            config,
            evaluator,
            llm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(use_fallback: bool) -> Config {
        Config {
            openai_api_key: if use_fallback {
                String::new()
            } else {
                "sk-test".to_string()
            },
            openai_model: "gpt-4o-mini".to_string(),
            openai_api_base: "https://api.openai.com/v1".to_string(),
            use_fallback,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_fallback_mode_has_no_llm_client() {
        let state = AppState::from_config(config(true));
        assert!(state.llm.is_none());
    }

    #[test]
    fn test_openai_mode_has_llm_client() {
        let state = AppState::from_config(config(false));
        assert!(state.llm.is_some());
    }
}
