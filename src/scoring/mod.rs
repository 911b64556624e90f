pub mod config;
pub mod engine;
pub mod validation;

pub use config::*;
pub use engine::{score_player, score_roster, AttributeContribution, ResolvedWeights, ScoreBreakdown, ScoredPlayer};
pub(crate) use engine::check_finite;
pub use validation::{validate_tuning, validate_weights};
