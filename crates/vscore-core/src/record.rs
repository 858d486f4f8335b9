//! The metrics record - one complete set of CVSS 4.0 metric selections

use crate::error::{Error, Result};
use crate::metric::{
    AttackComplexity, AttackRequirements, AttackVector, Automatable, ExploitMaturity, Impact,
    MetricValue, Modified, PrivilegesRequired, ProviderUrgency, Recovery, ResponseEffort, Safety,
    SecurityRequirement, UserInteraction, ValueDensity,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An immutable aggregate of the 31 CVSS 4.0 metric fields.
///
/// Base and threat fields are required on input; environmental and
/// supplemental fields default to Not Defined when absent. The record is
/// passed by reference into the engine and never mutated there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsRecord {
    // === Base metrics ===
    pub attack_vector: AttackVector,
    pub attack_complexity: AttackComplexity,
    pub attack_requirements: AttackRequirements,
    pub privileges_required: PrivilegesRequired,
    pub user_interaction: UserInteraction,
    pub confidentiality_impact: Impact,
    pub integrity_impact: Impact,
    pub availability_impact: Impact,

    // === Threat metrics ===
    pub subsequent_confidentiality_impact: Impact,
    pub subsequent_integrity_impact: Impact,
    pub subsequent_availability_impact: Impact,
    pub exploit_maturity: ExploitMaturity,

    // === Environmental metrics ===
    #[serde(default)]
    pub confidentiality_requirement: SecurityRequirement,
    #[serde(default)]
    pub integrity_requirement: SecurityRequirement,
    #[serde(default)]
    pub availability_requirement: SecurityRequirement,
    #[serde(default)]
    pub modified_attack_vector: Modified<AttackVector>,
    #[serde(default)]
    pub modified_attack_complexity: Modified<AttackComplexity>,
    #[serde(default)]
    pub modified_attack_requirements: Modified<AttackRequirements>,
    #[serde(default)]
    pub modified_privileges_required: Modified<PrivilegesRequired>,
    #[serde(default)]
    pub modified_user_interaction: Modified<UserInteraction>,
    #[serde(default)]
    pub modified_confidentiality_impact: Modified<Impact>,
    #[serde(default)]
    pub modified_integrity_impact: Modified<Impact>,
    #[serde(default)]
    pub modified_availability_impact: Modified<Impact>,
    #[serde(default)]
    pub modified_subsequent_confidentiality_impact: Modified<Impact>,
    #[serde(default)]
    pub modified_subsequent_integrity_impact: Modified<Impact>,
    #[serde(default)]
    pub modified_subsequent_availability_impact: Modified<Impact>,

    // === Supplemental metrics ===
    #[serde(default)]
    pub safety: Safety,
    #[serde(default)]
    pub automatable: Automatable,
    #[serde(default)]
    pub recovery: Recovery,
    #[serde(default)]
    pub value_density: ValueDensity,
    #[serde(default)]
    pub response_effort: ResponseEffort,
    #[serde(default)]
    pub provider_urgency: ProviderUrgency,
}

impl Default for MetricsRecord {
    /// The "no context supplied" record: a maximum-severity base vector
    /// with all threat, environmental and supplemental fields at their
    /// Not Defined / None defaults.
    fn default() -> Self {
        Self {
            attack_vector: AttackVector::Network,
            attack_complexity: AttackComplexity::Low,
            attack_requirements: AttackRequirements::None,
            privileges_required: PrivilegesRequired::None,
            user_interaction: UserInteraction::None,
            confidentiality_impact: Impact::High,
            integrity_impact: Impact::High,
            availability_impact: Impact::High,
            subsequent_confidentiality_impact: Impact::None,
            subsequent_integrity_impact: Impact::None,
            subsequent_availability_impact: Impact::None,
            exploit_maturity: ExploitMaturity::NotDefined,
            confidentiality_requirement: SecurityRequirement::NotDefined,
            integrity_requirement: SecurityRequirement::NotDefined,
            availability_requirement: SecurityRequirement::NotDefined,
            modified_attack_vector: Modified::NotDefined,
            modified_attack_complexity: Modified::NotDefined,
            modified_attack_requirements: Modified::NotDefined,
            modified_privileges_required: Modified::NotDefined,
            modified_user_interaction: Modified::NotDefined,
            modified_confidentiality_impact: Modified::NotDefined,
            modified_integrity_impact: Modified::NotDefined,
            modified_availability_impact: Modified::NotDefined,
            modified_subsequent_confidentiality_impact: Modified::NotDefined,
            modified_subsequent_integrity_impact: Modified::NotDefined,
            modified_subsequent_availability_impact: Modified::NotDefined,
            safety: Safety::NotDefined,
            automatable: Automatable::NotDefined,
            recovery: Recovery::NotDefined,
            value_density: ValueDensity::NotDefined,
            response_effort: ResponseEffort::NotDefined,
            provider_urgency: ProviderUrgency::NotDefined,
        }
    }
}

impl MetricsRecord {
    /// Validating boundary constructor: parse a JSON object of
    /// `field name -> metric code` into a record.
    ///
    /// Base and threat fields must be present; environmental and
    /// supplemental fields fall back to Not Defined. Unknown codes are
    /// rejected as [`Error::InvalidMetricValue`], absent required fields
    /// as [`Error::IncompleteRecord`].
    pub fn from_json(data: &str) -> Result<Self> {
        let codes: HashMap<String, String> = serde_json::from_str(data)?;
        Self::from_codes(&codes)
    }

    /// Build a record from a map of field names to metric codes.
    pub fn from_codes(codes: &HashMap<String, String>) -> Result<Self> {
        Ok(Self {
            attack_vector: required(codes, "attack_vector")?,
            attack_complexity: required(codes, "attack_complexity")?,
            attack_requirements: required(codes, "attack_requirements")?,
            privileges_required: required(codes, "privileges_required")?,
            user_interaction: required(codes, "user_interaction")?,
            confidentiality_impact: required(codes, "confidentiality_impact")?,
            integrity_impact: required(codes, "integrity_impact")?,
            availability_impact: required(codes, "availability_impact")?,
            subsequent_confidentiality_impact: required(codes, "subsequent_confidentiality_impact")?,
            subsequent_integrity_impact: required(codes, "subsequent_integrity_impact")?,
            subsequent_availability_impact: required(codes, "subsequent_availability_impact")?,
            exploit_maturity: required(codes, "exploit_maturity")?,
            confidentiality_requirement: optional(codes, "confidentiality_requirement")?,
            integrity_requirement: optional(codes, "integrity_requirement")?,
            availability_requirement: optional(codes, "availability_requirement")?,
            modified_attack_vector: optional(codes, "modified_attack_vector")?,
            modified_attack_complexity: optional(codes, "modified_attack_complexity")?,
            modified_attack_requirements: optional(codes, "modified_attack_requirements")?,
            modified_privileges_required: optional(codes, "modified_privileges_required")?,
            modified_user_interaction: optional(codes, "modified_user_interaction")?,
            modified_confidentiality_impact: optional(codes, "modified_confidentiality_impact")?,
            modified_integrity_impact: optional(codes, "modified_integrity_impact")?,
            modified_availability_impact: optional(codes, "modified_availability_impact")?,
            modified_subsequent_confidentiality_impact: optional(
                codes,
                "modified_subsequent_confidentiality_impact",
            )?,
            modified_subsequent_integrity_impact: optional(
                codes,
                "modified_subsequent_integrity_impact",
            )?,
            modified_subsequent_availability_impact: optional(
                codes,
                "modified_subsequent_availability_impact",
            )?,
            safety: optional(codes, "safety")?,
            automatable: optional(codes, "automatable")?,
            recovery: optional(codes, "recovery")?,
            value_density: optional(codes, "value_density")?,
            response_effort: optional(codes, "response_effort")?,
            provider_urgency: optional(codes, "provider_urgency")?,
        })
    }

    /// True when exploit maturity is defined or any subsequent impact is
    /// not None - the condition under which the threat score becomes the
    /// authoritative final score.
    pub fn has_threat_metrics(&self) -> bool {
        self.exploit_maturity.is_defined()
            || self.subsequent_confidentiality_impact != Impact::None
            || self.subsequent_integrity_impact != Impact::None
            || self.subsequent_availability_impact != Impact::None
    }

    /// True when any environmental field is defined - the condition under
    /// which the environmental score becomes the authoritative final score.
    pub fn has_environmental_metrics(&self) -> bool {
        self.confidentiality_requirement.is_defined()
            || self.integrity_requirement.is_defined()
            || self.availability_requirement.is_defined()
            || self.modified_attack_vector.is_defined()
            || self.modified_attack_complexity.is_defined()
            || self.modified_attack_requirements.is_defined()
            || self.modified_privileges_required.is_defined()
            || self.modified_user_interaction.is_defined()
            || self.modified_confidentiality_impact.is_defined()
            || self.modified_integrity_impact.is_defined()
            || self.modified_availability_impact.is_defined()
            || self.modified_subsequent_confidentiality_impact.is_defined()
            || self.modified_subsequent_integrity_impact.is_defined()
            || self.modified_subsequent_availability_impact.is_defined()
    }
}

fn required<T: MetricValue>(codes: &HashMap<String, String>, field: &'static str) -> Result<T> {
    match codes.get(field) {
        None => Err(Error::IncompleteRecord { field }),
        Some(code) => T::from_code(code).ok_or_else(|| Error::InvalidMetricValue {
            metric: field,
            value: code.clone(),
        }),
    }
}

fn optional<T: MetricValue + Default>(
    codes: &HashMap<String, String>,
    field: &'static str,
) -> Result<T> {
    match codes.get(field) {
        None => Ok(T::default()),
        Some(code) => T::from_code(code).ok_or_else(|| Error::InvalidMetricValue {
            metric: field,
            value: code.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = MetricsRecord::default();
        assert_eq!(record.attack_vector, AttackVector::Network);
        assert_eq!(record.confidentiality_impact, Impact::High);
        assert_eq!(record.subsequent_confidentiality_impact, Impact::None);
        assert_eq!(record.exploit_maturity, ExploitMaturity::NotDefined);
        assert!(!record.has_threat_metrics());
        assert!(!record.has_environmental_metrics());
    }

    #[test]
    fn test_from_json_minimal() {
        let record = MetricsRecord::from_json(
            r#"{
                "attack_vector": "L",
                "attack_complexity": "H",
                "attack_requirements": "P",
                "privileges_required": "H",
                "user_interaction": "A",
                "confidentiality_impact": "L",
                "integrity_impact": "N",
                "availability_impact": "N",
                "subsequent_confidentiality_impact": "N",
                "subsequent_integrity_impact": "N",
                "subsequent_availability_impact": "N",
                "exploit_maturity": "X"
            }"#,
        )
        .unwrap();

        assert_eq!(record.attack_vector, AttackVector::Local);
        assert_eq!(record.privileges_required, PrivilegesRequired::High);
        // absent environmental/supplemental fields fall back to Not Defined
        assert_eq!(record.modified_attack_vector, Modified::NotDefined);
        assert_eq!(record.safety, Safety::NotDefined);
    }

    #[test]
    fn test_from_json_rejects_unknown_code() {
        let mut codes = HashMap::new();
        codes.insert(String::from("attack_vector"), String::from("Z"));
        let err = MetricsRecord::from_codes(&codes).unwrap_err();
        match err {
            Error::InvalidMetricValue { metric, value } => {
                assert_eq!(metric, "attack_vector");
                assert_eq!(value, "Z");
            }
            other => panic!("expected InvalidMetricValue, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_rejects_missing_threat_field() {
        let mut codes = HashMap::new();
        for (field, code) in [
            ("attack_vector", "N"),
            ("attack_complexity", "L"),
            ("attack_requirements", "N"),
            ("privileges_required", "N"),
            ("user_interaction", "N"),
            ("confidentiality_impact", "H"),
            ("integrity_impact", "H"),
            ("availability_impact", "H"),
        ] {
            codes.insert(String::from(field), String::from(code));
        }
        let err = MetricsRecord::from_codes(&codes).unwrap_err();
        assert!(matches!(err, Error::IncompleteRecord { .. }));
    }

    #[test]
    fn test_from_codes_rejects_bad_optional_code() {
        // invalid supplemental codes are rejected, not defaulted
        let mut codes = HashMap::new();
        for (field, code) in [
            ("attack_vector", "N"),
            ("attack_complexity", "L"),
            ("attack_requirements", "N"),
            ("privileges_required", "N"),
            ("user_interaction", "N"),
            ("confidentiality_impact", "H"),
            ("integrity_impact", "H"),
            ("availability_impact", "H"),
            ("subsequent_confidentiality_impact", "N"),
            ("subsequent_integrity_impact", "N"),
            ("subsequent_availability_impact", "N"),
            ("exploit_maturity", "X"),
            ("provider_urgency", "Q"),
        ] {
            codes.insert(String::from(field), String::from(code));
        }
        let err = MetricsRecord::from_codes(&codes).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMetricValue {
                metric: "provider_urgency",
                ..
            }
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut record = MetricsRecord::default();
        record.exploit_maturity = ExploitMaturity::Poc;
        record.modified_attack_vector = Modified::Defined(AttackVector::Adjacent);
        record.provider_urgency = ProviderUrgency::Red;

        let json = serde_json::to_string(&record).unwrap();
        let back: MetricsRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_threat_metrics_detection() {
        let mut record = MetricsRecord::default();
        assert!(!record.has_threat_metrics());

        record.exploit_maturity = ExploitMaturity::Unreported;
        assert!(record.has_threat_metrics());

        record.exploit_maturity = ExploitMaturity::NotDefined;
        record.subsequent_integrity_impact = Impact::Low;
        assert!(record.has_threat_metrics());
    }

    #[test]
    fn test_environmental_metrics_detection() {
        let mut record = MetricsRecord::default();
        assert!(!record.has_environmental_metrics());

        record.integrity_requirement = SecurityRequirement::Medium;
        assert!(record.has_environmental_metrics());

        record.integrity_requirement = SecurityRequirement::NotDefined;
        record.modified_user_interaction = Modified::Defined(UserInteraction::Passive);
        assert!(record.has_environmental_metrics());
    }
}
