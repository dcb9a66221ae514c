//! Quality risk scoring for software releases.
//!
//! Measurements are grouped into four weighted dimensions. Each criterion is
//! classified into a tier against a threshold pair, tiers are averaged into
//! dimension scores, and the weighted total lands in a low/medium/high band.
//! Veto rules block a release outright regardless of the score.

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod model;
pub mod report;
pub mod telemetry;
pub mod types;

pub use engine::{evaluate, evaluate_with};
pub use error::{Result, RiskError};
pub use model::ScoringModel;
pub use types::report::{EvaluationResult, Status};
pub use types::scoring::{Dataset, Dimension, RiskLevel, Tier};
