//! Environmental score - the base/threat computation re-derived from
//! modified metrics and security-requirement weightings

use crate::base::{exploitability, round_up};
use vscore_core::MetricsRecord;

/// Ceiling applied to each impact weight after multiplication by its
/// security requirement.
const REQUIREMENT_CAP: f64 = 0.915;

/// Compute the environmental score.
///
/// When every environmental field (CR, IR, AR and all fourteen modified
/// metrics) is Not Defined the environmental score is the threat score
/// exactly. Otherwise each modified field resolves against its base
/// counterpart and the base/threat pipeline is recomputed with
/// requirement-weighted, capped impacts. The exploit factor comes from
/// the original (unmodified) exploit maturity.
pub fn environmental_score(record: &MetricsRecord, threat_score: f64) -> f64 {
    if !record.has_environmental_metrics() {
        return threat_score;
    }

    let modified_exploitability = exploitability(
        record.modified_attack_vector.resolve(record.attack_vector),
        record
            .modified_attack_complexity
            .resolve(record.attack_complexity),
        record
            .modified_attack_requirements
            .resolve(record.attack_requirements),
        record
            .modified_privileges_required
            .resolve(record.privileges_required),
        record
            .modified_user_interaction
            .resolve(record.user_interaction),
    );

    let cr = record.confidentiality_requirement.weight();
    let ir = record.integrity_requirement.weight();
    let ar = record.availability_requirement.weight();

    let conf = record
        .modified_confidentiality_impact
        .resolve(record.confidentiality_impact)
        .weight();
    let integ = record
        .modified_integrity_impact
        .resolve(record.integrity_impact)
        .weight();
    let avail = record
        .modified_availability_impact
        .resolve(record.availability_impact)
        .weight();

    let modified_impact = 1.0
        - (1.0 - (conf * cr).min(REQUIREMENT_CAP))
            * (1.0 - (integ * ir).min(REQUIREMENT_CAP))
            * (1.0 - (avail * ar).min(REQUIREMENT_CAP));

    let modified_base_score = round_up((modified_exploitability * modified_impact).min(10.0));

    let sub_conf = record
        .modified_subsequent_confidentiality_impact
        .resolve(record.subsequent_confidentiality_impact)
        .weight();
    let sub_integ = record
        .modified_subsequent_integrity_impact
        .resolve(record.subsequent_integrity_impact)
        .weight();
    let sub_avail = record
        .modified_subsequent_availability_impact
        .resolve(record.subsequent_availability_impact)
        .weight();

    let modified_subsequent_impact = 1.0
        - (1.0 - (sub_conf * cr).min(REQUIREMENT_CAP))
            * (1.0 - (sub_integ * ir).min(REQUIREMENT_CAP))
            * (1.0 - (sub_avail * ar).min(REQUIREMENT_CAP));

    let exploit_factor = record.exploit_maturity.weight();

    round_up(
        (modified_base_score + modified_exploitability * modified_subsequent_impact * exploit_factor)
            .min(10.0),
    )
}
