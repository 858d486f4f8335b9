//! Score results and severity classification

use serde::{Deserialize, Serialize};

/// Qualitative severity rating of a CVSS 4.0 score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Score of exactly 0.0
    #[default]
    None,
    /// 0.1 - 3.9
    Low,
    /// 4.0 - 6.9
    Medium,
    /// 7.0 - 8.9
    High,
    /// 9.0 - 10.0
    Critical,
}

impl Severity {
    /// Classify a one-decimal score into its severity band.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s <= 0.0 => Severity::None,
            s if s < 4.0 => Severity::Low,
            s if s < 7.0 => Severity::Medium,
            s if s < 9.0 => Severity::High,
            _ => Severity::Critical,
        }
    }

    /// Get display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// Get a human-readable description of the rating
    pub fn description(&self) -> &'static str {
        match self {
            Severity::None => "No security impact.",
            Severity::Low => "Address during regular maintenance cycles.",
            Severity::Medium => "Remediation recommended within 30 days.",
            Severity::High => "Urgent remediation needed. Significant risk of exploitation.",
            Severity::Critical => "Immediate action required. High likelihood of active exploitation.",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full scoring output for one metrics record.
///
/// Every score is in [0.0, 10.0], rounded up to one decimal. The final
/// score is one of base, threat or environmental; the supplemental score
/// is informational and never selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub base_score: f64,
    pub threat_score: f64,
    pub environmental_score: f64,
    pub supplemental_score: f64,
    pub final_score: f64,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_score() {
        assert_eq!(Severity::from_score(0.0), Severity::None);
        assert_eq!(Severity::from_score(0.1), Severity::Low);
        assert_eq!(Severity::from_score(3.9), Severity::Low);
        assert_eq!(Severity::from_score(4.0), Severity::Medium);
        assert_eq!(Severity::from_score(6.9), Severity::Medium);
        assert_eq!(Severity::from_score(7.0), Severity::High);
        assert_eq!(Severity::from_score(8.9), Severity::High);
        assert_eq!(Severity::from_score(9.0), Severity::Critical);
        assert_eq!(Severity::from_score(10.0), Severity::Critical);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert!(Severity::Low > Severity::None);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Medium.to_string(), "Medium");
        assert_eq!(Severity::Critical.as_str(), "Critical");
    }
}
