//! Named, timestamped assessment wrapping one evaluation
//!
//! The engine itself never reads the clock; the identifier and timestamp
//! here are caller-layer bookkeeping attached for export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vscore_core::{MetricsRecord, ScoreResult};
use vscore_engine::Evaluation;

/// One scored assessment, ready for export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Unique assessment ID
    pub id: Uuid,

    /// Caller-chosen name
    pub name: String,

    /// When the assessment was produced
    pub created_at: DateTime<Utc>,

    /// The metric selections that were scored
    pub metrics: MetricsRecord,

    /// The five sub-scores and severity
    pub scores: ScoreResult,

    /// Canonical CVSS 4.0 vector encoding of the metrics
    pub vector: String,
}

impl Assessment {
    /// Wrap an evaluation with a name, fresh ID and timestamp
    pub fn new(name: impl Into<String>, metrics: MetricsRecord, evaluation: Evaluation) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            metrics,
            scores: evaluation.scores,
            vector: evaluation.vector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vscore_engine::evaluate;

    #[test]
    fn test_assessment_wraps_evaluation() {
        let record = MetricsRecord::default();
        let evaluation = evaluate(&record);
        let assessment = Assessment::new("web server RCE", record.clone(), evaluation.clone());

        assert_eq!(assessment.name, "web server RCE");
        assert_eq!(assessment.metrics, record);
        assert_eq!(assessment.scores, evaluation.scores);
        assert_eq!(assessment.vector, evaluation.vector);
    }

    #[test]
    fn test_assessment_serializes_with_all_fields() {
        let record = MetricsRecord::default();
        let assessment = Assessment::new("test", record.clone(), evaluate(&record));
        let json = serde_json::to_string(&assessment).unwrap();

        assert!(json.contains("\"id\""));
        assert!(json.contains("\"created_at\""));
        assert!(json.contains("\"final_score\""));
        assert!(json.contains("CVSS:4.0/"));
    }
}
