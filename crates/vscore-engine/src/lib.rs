//! vscore Engine - CVSS 4.0 scoring pipeline
//!
//! This crate turns one [`MetricsRecord`] into its scores and canonical
//! vector string:
//! - four sub-score calculators (base, threat, environmental, supplemental)
//! - the final-score selector and severity classification
//! - the vector encoder
//!
//! Every operation is a pure, synchronous function of its inputs; the
//! engine holds no state between calls and any number of evaluations may
//! run concurrently.

pub mod base;
pub mod environmental;
pub mod supplemental;
pub mod threat;
pub mod vector;

use serde::{Deserialize, Serialize};
use tracing::debug;
use vscore_core::{MetricsRecord, ScoreResult, Severity};

pub use base::base_score;
pub use environmental::environmental_score;
pub use supplemental::supplemental_score;
pub use threat::threat_score;
pub use vector::vector_string;

/// Result of one evaluation: the scores plus the canonical vector encoding
/// of the record they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub scores: ScoreResult,
    pub vector: String,
}

/// Pick the authoritative score, highest-priority applicable rule first:
/// environmental when any environmental field is defined, else threat when
/// any threat context is supplied, else base.
pub fn select_final_score(
    record: &MetricsRecord,
    base: f64,
    threat: f64,
    environmental: f64,
) -> f64 {
    if record.has_environmental_metrics() {
        environmental
    } else if record.has_threat_metrics() {
        threat
    } else {
        base
    }
}

/// Evaluate one metrics record: run all four calculators, select the final
/// score, classify its severity and encode the vector string.
pub fn evaluate(record: &MetricsRecord) -> Evaluation {
    let base = base_score(record);
    let threat = threat_score(record, base);
    let environmental = environmental_score(record, threat);
    let supplemental = supplemental_score(record, base);

    let final_score = select_final_score(record, base, threat, environmental);
    let severity = Severity::from_score(final_score);

    debug!(
        base,
        threat, environmental, supplemental, final_score, "scored metrics record"
    );

    Evaluation {
        scores: ScoreResult {
            base_score: base,
            threat_score: threat,
            environmental_score: environmental,
            supplemental_score: supplemental,
            final_score,
            severity,
        },
        vector: vector_string(record),
    }
}
