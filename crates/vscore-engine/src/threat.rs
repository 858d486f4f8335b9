//! Threat score - base score adjusted for exploit maturity and
//! subsequent-system impact

use crate::base::{combined_impact, exploitability, round_up};
use vscore_core::MetricsRecord;

/// Compute the threat score.
///
/// When exploit maturity is Not Defined and all three subsequent impacts
/// are None the threat score is the base score exactly - no recomputation,
/// no rounding drift.
pub fn threat_score(record: &MetricsRecord, base_score: f64) -> f64 {
    if !record.has_threat_metrics() {
        return base_score;
    }

    let exploitability = exploitability(
        record.attack_vector,
        record.attack_complexity,
        record.attack_requirements,
        record.privileges_required,
        record.user_interaction,
    );

    let subsequent_impact = combined_impact(
        record.subsequent_confidentiality_impact.weight(),
        record.subsequent_integrity_impact.weight(),
        record.subsequent_availability_impact.weight(),
    );

    let exploit_factor = record.exploit_maturity.weight();

    round_up((base_score + exploitability * subsequent_impact * exploit_factor).min(10.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::base_score;
    use vscore_core::{ExploitMaturity, Impact};

    #[test]
    fn test_short_circuit_to_base() {
        let record = MetricsRecord::default();
        let base = base_score(&record);
        // E:X and SC/SI/SA all None: threat must equal base bit-for-bit
        assert_eq!(threat_score(&record, base), base);
    }

    #[test]
    fn test_attacked_with_subsequent_impact() {
        let record = MetricsRecord {
            exploit_maturity: ExploitMaturity::Attacked,
            subsequent_confidentiality_impact: Impact::High,
            subsequent_integrity_impact: Impact::High,
            subsequent_availability_impact: Impact::High,
            ..Default::default()
        };
        let base = base_score(&record);
        assert_eq!(base, 3.1);
        assert_eq!(threat_score(&record, base), 6.2);
    }

    #[test]
    fn test_poc_with_single_subsequent_impact() {
        let record = MetricsRecord {
            exploit_maturity: ExploitMaturity::Poc,
            subsequent_confidentiality_impact: Impact::High,
            ..Default::default()
        };
        let base = base_score(&record);
        assert_eq!(threat_score(&record, base), 4.9);
    }

    #[test]
    fn test_defined_maturity_without_subsequent_impact() {
        // E defined but no subsequent impact: the extension term is zero,
        // the score still goes through the full computation
        let record = MetricsRecord {
            exploit_maturity: ExploitMaturity::Unreported,
            ..Default::default()
        };
        let base = base_score(&record);
        assert_eq!(threat_score(&record, base), 3.1);
    }

    #[test]
    fn test_never_exceeds_ten() {
        let record = MetricsRecord {
            exploit_maturity: ExploitMaturity::Attacked,
            subsequent_confidentiality_impact: Impact::High,
            subsequent_integrity_impact: Impact::High,
            subsequent_availability_impact: Impact::High,
            ..Default::default()
        };
        // even with an inflated base the clamp holds
        assert_eq!(threat_score(&record, 9.9), 10.0);
    }
}
