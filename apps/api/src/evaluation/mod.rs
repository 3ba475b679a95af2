pub mod evaluator;
pub mod handlers;
pub mod heuristics;
pub mod prompts;
pub mod ranking;
