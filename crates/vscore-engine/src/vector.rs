//! Canonical CVSS 4.0 vector string encoding
//!
//! Pure projection of a metrics record into the `CVSS:4.0/...` form, with
//! the fields in the fixed order defined by the specification. Encoding is
//! total: it performs no validation beyond what the record's construction
//! already guarantees.

use vscore_core::{MetricValue, MetricsRecord};

/// Serialize a full metrics record into its canonical vector string.
pub fn vector_string(record: &MetricsRecord) -> String {
    format!(
        "CVSS:4.0/AV:{}/AC:{}/AT:{}/PR:{}/UI:{}/VC:{}/VI:{}/VA:{}/SC:{}/SI:{}/SA:{}/E:{}\
         /CR:{}/IR:{}/AR:{}/MAV:{}/MAC:{}/MAT:{}/MPR:{}/MUI:{}/MVC:{}/MVI:{}/MVA:{}\
         /MSC:{}/MSI:{}/MSA:{}/S:{}/AU:{}/R:{}/V:{}/RE:{}/U:{}",
        record.attack_vector.code(),
        record.attack_complexity.code(),
        record.attack_requirements.code(),
        record.privileges_required.code(),
        record.user_interaction.code(),
        record.confidentiality_impact.code(),
        record.integrity_impact.code(),
        record.availability_impact.code(),
        record.subsequent_confidentiality_impact.code(),
        record.subsequent_integrity_impact.code(),
        record.subsequent_availability_impact.code(),
        record.exploit_maturity.code(),
        record.confidentiality_requirement.code(),
        record.integrity_requirement.code(),
        record.availability_requirement.code(),
        record.modified_attack_vector.code(),
        record.modified_attack_complexity.code(),
        record.modified_attack_requirements.code(),
        record.modified_privileges_required.code(),
        record.modified_user_interaction.code(),
        record.modified_confidentiality_impact.code(),
        record.modified_integrity_impact.code(),
        record.modified_availability_impact.code(),
        record.modified_subsequent_confidentiality_impact.code(),
        record.modified_subsequent_integrity_impact.code(),
        record.modified_subsequent_availability_impact.code(),
        record.safety.code(),
        record.automatable.code(),
        record.recovery.code(),
        record.value_density.code(),
        record.response_effort.code(),
        record.provider_urgency.code(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vscore_core::{
        AttackVector, ExploitMaturity, Impact, Modified, ProviderUrgency, SecurityRequirement,
    };

    #[test]
    fn test_default_record_vector() {
        assert_eq!(
            vector_string(&MetricsRecord::default()),
            "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N/E:X\
             /CR:X/IR:X/AR:X/MAV:X/MAC:X/MAT:X/MPR:X/MUI:X/MVC:X/MVI:X/MVA:X\
             /MSC:X/MSI:X/MSA:X/S:X/AU:X/R:X/V:X/RE:X/U:X"
        );
    }

    #[test]
    fn test_defined_fields_use_their_codes() {
        let record = MetricsRecord {
            attack_vector: AttackVector::Adjacent,
            exploit_maturity: ExploitMaturity::Poc,
            confidentiality_requirement: SecurityRequirement::Medium,
            modified_attack_vector: Modified::Defined(AttackVector::Local),
            modified_subsequent_integrity_impact: Modified::Defined(Impact::Low),
            provider_urgency: ProviderUrgency::Amber,
            ..Default::default()
        };
        let vector = vector_string(&record);
        assert!(vector.starts_with("CVSS:4.0/AV:A/"));
        assert!(vector.contains("/E:P/"));
        assert!(vector.contains("/CR:M/"));
        assert!(vector.contains("/MAV:L/"));
        assert!(vector.contains("/MSI:L/"));
        assert!(vector.ends_with("/U:A"));
    }

    #[test]
    fn test_encoding_is_stable() {
        let record = MetricsRecord::default();
        assert_eq!(vector_string(&record), vector_string(&record));
    }
}
