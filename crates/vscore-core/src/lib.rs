//! vscore Core - Foundation types for the CVSS 4.0 scoring engine
//!
//! This crate provides the types shared by every vscore component:
//! - The metric catalog: one closed enum per CVSS 4.0 metric, with weights
//! - `MetricsRecord`: one complete set of metric selections
//! - `ScoreResult` and `Severity`: the scoring output
//! - `Error`/`Result`: the error taxonomy

pub mod error;
pub mod metric;
pub mod record;
pub mod score;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use metric::{
    AttackComplexity, AttackRequirements, AttackVector, Automatable, ExploitMaturity, Impact,
    MetricValue, Modified, PrivilegesRequired, ProviderUrgency, Recovery, ResponseEffort, Safety,
    SecurityRequirement, UserInteraction, ValueDensity,
};
pub use record::MetricsRecord;
pub use score::{ScoreResult, Severity};
