pub mod config;
pub mod factors;
pub mod engine;
pub mod validation;

pub use config::*;
pub use engine::{calculate_score, score, RuleContribution, ScoreResult, ScoredDataset, ScoredLead};
pub use validation::validate_scoring;
