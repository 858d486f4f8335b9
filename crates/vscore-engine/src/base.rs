//! Base score - exploitability and impact of the vulnerable system itself

use vscore_core::{
    AttackComplexity, AttackRequirements, AttackVector, MetricsRecord, PrivilegesRequired,
    UserInteraction,
};

/// Scaling coefficient applied to the exploitability sub-factor.
pub(crate) const EXPLOITABILITY_COEFFICIENT: f64 = 8.22;

/// Round up to one decimal place (ceiling at 0.1 granularity).
///
/// Exact tenths pass through unchanged: 3.61 -> 3.7, 3.7 -> 3.7.
pub(crate) fn round_up(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}

/// Exploitability sub-factor over a set of (possibly resolved) metrics.
///
/// Shared by the base, threat and environmental calculators; the
/// environmental calculator passes resolved modified values.
pub(crate) fn exploitability(
    av: AttackVector,
    ac: AttackComplexity,
    at: AttackRequirements,
    pr: PrivilegesRequired,
    ui: UserInteraction,
) -> f64 {
    EXPLOITABILITY_COEFFICIENT * av.weight() * ac.weight() * at.weight() * pr.weight() * ui.weight()
}

/// Combine three impact weights: 1 - (1-c)(1-i)(1-a).
pub(crate) fn combined_impact(c: f64, i: f64, a: f64) -> f64 {
    1.0 - (1.0 - c) * (1.0 - i) * (1.0 - a)
}

/// Compute the base score from the eight base metrics.
pub fn base_score(record: &MetricsRecord) -> f64 {
    let exploitability = exploitability(
        record.attack_vector,
        record.attack_complexity,
        record.attack_requirements,
        record.privileges_required,
        record.user_interaction,
    );

    let impact = combined_impact(
        record.confidentiality_impact.weight(),
        record.integrity_impact.weight(),
        record.availability_impact.weight(),
    );

    round_up((exploitability * impact).min(10.0))
}
