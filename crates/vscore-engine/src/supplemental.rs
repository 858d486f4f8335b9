//! Supplemental score - contextual multipliers over the base score
//!
//! Informational only: the supplemental score is reported alongside the
//! others but never selected as the final score, so supplemental context
//! cannot silently alter the authoritative severity number.

use crate::base::round_up;
use vscore_core::MetricsRecord;

/// Compute the supplemental score from the six supplemental metrics.
pub fn supplemental_score(record: &MetricsRecord, base_score: f64) -> f64 {
    let product = base_score
        * record.safety.weight()
        * record.automatable.weight()
        * record.recovery.weight()
        * record.value_density.weight()
        * record.response_effort.weight()
        * record.provider_urgency.weight();

    round_up(product.min(10.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::base_score;
    use vscore_core::{
        Automatable, ProviderUrgency, Recovery, ResponseEffort, Safety, ValueDensity,
    };

    #[test]
    fn test_all_not_defined_is_neutral() {
        let record = MetricsRecord::default();
        let base = base_score(&record);
        assert_eq!(supplemental_score(&record, base), base);
    }

    #[test]
    fn test_safety_present_raises_score() {
        let record = MetricsRecord {
            safety: Safety::Present,
            ..Default::default()
        };
        let base = base_score(&record);
        assert_eq!(base, 3.1);
        assert_eq!(supplemental_score(&record, base), 3.5);
    }

    #[test]
    fn test_all_aggravating_factors() {
        let record = MetricsRecord {
            safety: Safety::Present,
            automatable: Automatable::Yes,
            recovery: Recovery::Irrecoverable,
            value_density: ValueDensity::Concentrated,
            response_effort: ResponseEffort::High,
            provider_urgency: ProviderUrgency::Red,
            ..Default::default()
        };
        let base = base_score(&record);
        assert_eq!(supplemental_score(&record, base), 5.3);
    }

    #[test]
    fn test_clamped_at_ten() {
        let record = MetricsRecord {
            safety: Safety::Present,
            recovery: Recovery::Irrecoverable,
            ..Default::default()
        };
        assert_eq!(supplemental_score(&record, 9.8), 10.0);
    }
}
