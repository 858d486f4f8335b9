//! CVSS 4.0 metric catalog
//!
//! One closed enum per metric. Each value knows its single-letter code and
//! its numeric weight from the CVSS 4.0 specification, so an out-of-range
//! value is unrepresentable once a record has been constructed and weight
//! lookups are exhaustive matches with no fallthrough.

use serde::{Deserialize, Serialize};

/// A single metric value: its vector code and its inverse.
pub trait MetricValue: Sized + Copy {
    /// Single-letter code used in the vector string (e.g. `N`, `H`, `X`).
    fn code(&self) -> &'static str;

    /// Parse a vector code. Returns `None` for codes outside the
    /// metric's enumeration.
    fn from_code(code: &str) -> Option<Self>;
}

/// Attack Vector (AV)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackVector {
    /// N - remotely exploitable over the network
    #[default]
    #[serde(rename = "N")]
    Network,
    /// A - limited to an adjacent network
    #[serde(rename = "A")]
    Adjacent,
    /// L - requires local access
    #[serde(rename = "L")]
    Local,
    /// P - requires physical access
    #[serde(rename = "P")]
    Physical,
}

impl AttackVector {
    pub fn weight(&self) -> f64 {
        match self {
            AttackVector::Network => 0.85,
            AttackVector::Adjacent => 0.62,
            AttackVector::Local => 0.55,
            AttackVector::Physical => 0.20,
        }
    }
}

impl MetricValue for AttackVector {
    fn code(&self) -> &'static str {
        match self {
            AttackVector::Network => "N",
            AttackVector::Adjacent => "A",
            AttackVector::Local => "L",
            AttackVector::Physical => "P",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(AttackVector::Network),
            "A" => Some(AttackVector::Adjacent),
            "L" => Some(AttackVector::Local),
            "P" => Some(AttackVector::Physical),
            _ => None,
        }
    }
}

/// Attack Complexity (AC)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackComplexity {
    /// L - no specialized conditions
    #[default]
    #[serde(rename = "L")]
    Low,
    /// H - depends on evading built-in defenses
    #[serde(rename = "H")]
    High,
}

impl AttackComplexity {
    pub fn weight(&self) -> f64 {
        match self {
            AttackComplexity::Low => 0.77,
            AttackComplexity::High => 0.44,
        }
    }
}

impl MetricValue for AttackComplexity {
    fn code(&self) -> &'static str {
        match self {
            AttackComplexity::Low => "L",
            AttackComplexity::High => "H",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "L" => Some(AttackComplexity::Low),
            "H" => Some(AttackComplexity::High),
            _ => None,
        }
    }
}

/// Attack Requirements (AT)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackRequirements {
    /// N - no deployment conditions required
    #[default]
    #[serde(rename = "N")]
    None,
    /// P - specific deployment conditions must be present
    #[serde(rename = "P")]
    Present,
}

impl AttackRequirements {
    pub fn weight(&self) -> f64 {
        match self {
            AttackRequirements::None => 0.86,
            AttackRequirements::Present => 0.77,
        }
    }
}

impl MetricValue for AttackRequirements {
    fn code(&self) -> &'static str {
        match self {
            AttackRequirements::None => "N",
            AttackRequirements::Present => "P",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(AttackRequirements::None),
            "P" => Some(AttackRequirements::Present),
            _ => None,
        }
    }
}

/// Privileges Required (PR)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrivilegesRequired {
    #[default]
    #[serde(rename = "N")]
    None,
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "H")]
    High,
}

impl PrivilegesRequired {
    pub fn weight(&self) -> f64 {
        match self {
            PrivilegesRequired::None => 0.85,
            PrivilegesRequired::Low => 0.62,
            PrivilegesRequired::High => 0.27,
        }
    }
}

impl MetricValue for PrivilegesRequired {
    fn code(&self) -> &'static str {
        match self {
            PrivilegesRequired::None => "N",
            PrivilegesRequired::Low => "L",
            PrivilegesRequired::High => "H",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(PrivilegesRequired::None),
            "L" => Some(PrivilegesRequired::Low),
            "H" => Some(PrivilegesRequired::High),
            _ => None,
        }
    }
}

/// User Interaction (UI)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserInteraction {
    #[default]
    #[serde(rename = "N")]
    None,
    /// P - user performs involuntary actions (e.g. visits a page)
    #[serde(rename = "P")]
    Passive,
    /// A - user must actively subvert protections
    #[serde(rename = "A")]
    Active,
}

impl UserInteraction {
    pub fn weight(&self) -> f64 {
        match self {
            UserInteraction::None => 0.85,
            UserInteraction::Passive => 0.62,
            UserInteraction::Active => 0.43,
        }
    }
}

impl MetricValue for UserInteraction {
    fn code(&self) -> &'static str {
        match self {
            UserInteraction::None => "N",
            UserInteraction::Passive => "P",
            UserInteraction::Active => "A",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(UserInteraction::None),
            "P" => Some(UserInteraction::Passive),
            "A" => Some(UserInteraction::Active),
            _ => None,
        }
    }
}

/// Impact on confidentiality, integrity or availability.
///
/// Shared by the vulnerable-system metrics (VC/VI/VA) and the
/// subsequent-system metrics (SC/SI/SA).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "H")]
    High,
    #[serde(rename = "L")]
    Low,
    #[default]
    #[serde(rename = "N")]
    None,
}

impl Impact {
    pub fn weight(&self) -> f64 {
        match self {
            Impact::High => 0.56,
            Impact::Low => 0.22,
            Impact::None => 0.0,
        }
    }
}

impl MetricValue for Impact {
    fn code(&self) -> &'static str {
        match self {
            Impact::High => "H",
            Impact::Low => "L",
            Impact::None => "N",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "H" => Some(Impact::High),
            "L" => Some(Impact::Low),
            "N" => Some(Impact::None),
            _ => None,
        }
    }
}

/// Exploit Maturity (E)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExploitMaturity {
    /// A - attacks reported in the wild
    #[serde(rename = "A")]
    Attacked,
    /// P - proof-of-concept is publicly available
    #[serde(rename = "P")]
    Poc,
    /// U - no reported exploitation or PoC
    #[serde(rename = "U")]
    Unreported,
    #[default]
    #[serde(rename = "X")]
    NotDefined,
}

impl ExploitMaturity {
    pub fn weight(&self) -> f64 {
        match self {
            ExploitMaturity::Attacked => 1.0,
            ExploitMaturity::Poc => 0.94,
            ExploitMaturity::Unreported => 0.91,
            ExploitMaturity::NotDefined => 1.0,
        }
    }

    pub fn is_defined(&self) -> bool {
        *self != ExploitMaturity::NotDefined
    }
}

impl MetricValue for ExploitMaturity {
    fn code(&self) -> &'static str {
        match self {
            ExploitMaturity::Attacked => "A",
            ExploitMaturity::Poc => "P",
            ExploitMaturity::Unreported => "U",
            ExploitMaturity::NotDefined => "X",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(ExploitMaturity::Attacked),
            "P" => Some(ExploitMaturity::Poc),
            "U" => Some(ExploitMaturity::Unreported),
            "X" => Some(ExploitMaturity::NotDefined),
            _ => None,
        }
    }
}

/// Security requirement (CR/IR/AR) - how important the protected property
/// is to the assessing organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityRequirement {
    #[serde(rename = "H")]
    High,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Low,
    #[default]
    #[serde(rename = "X")]
    NotDefined,
}

impl SecurityRequirement {
    pub fn weight(&self) -> f64 {
        match self {
            SecurityRequirement::High => 1.5,
            SecurityRequirement::Medium => 1.0,
            SecurityRequirement::Low => 0.5,
            SecurityRequirement::NotDefined => 1.0,
        }
    }

    pub fn is_defined(&self) -> bool {
        *self != SecurityRequirement::NotDefined
    }
}

impl MetricValue for SecurityRequirement {
    fn code(&self) -> &'static str {
        match self {
            SecurityRequirement::High => "H",
            SecurityRequirement::Medium => "M",
            SecurityRequirement::Low => "L",
            SecurityRequirement::NotDefined => "X",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "H" => Some(SecurityRequirement::High),
            "M" => Some(SecurityRequirement::Medium),
            "L" => Some(SecurityRequirement::Low),
            "X" => Some(SecurityRequirement::NotDefined),
            _ => None,
        }
    }
}

/// Safety (S) - supplemental
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Safety {
    /// P - exploitation can cause physical harm
    #[serde(rename = "P")]
    Present,
    #[serde(rename = "N")]
    Negligible,
    #[default]
    #[serde(rename = "X")]
    NotDefined,
}

impl Safety {
    pub fn weight(&self) -> f64 {
        match self {
            Safety::Present => 1.1,
            Safety::Negligible => 1.0,
            Safety::NotDefined => 1.0,
        }
    }
}

impl MetricValue for Safety {
    fn code(&self) -> &'static str {
        match self {
            Safety::Present => "P",
            Safety::Negligible => "N",
            Safety::NotDefined => "X",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "P" => Some(Safety::Present),
            "N" => Some(Safety::Negligible),
            "X" => Some(Safety::NotDefined),
            _ => None,
        }
    }
}

/// Automatable (AU) - supplemental
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Automatable {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
    #[default]
    #[serde(rename = "X")]
    NotDefined,
}

impl Automatable {
    pub fn weight(&self) -> f64 {
        match self {
            Automatable::Yes => 1.05,
            Automatable::No => 0.95,
            Automatable::NotDefined => 1.0,
        }
    }
}

impl MetricValue for Automatable {
    fn code(&self) -> &'static str {
        match self {
            Automatable::Yes => "Y",
            Automatable::No => "N",
            Automatable::NotDefined => "X",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "Y" => Some(Automatable::Yes),
            "N" => Some(Automatable::No),
            "X" => Some(Automatable::NotDefined),
            _ => None,
        }
    }
}

/// Recovery (R) - supplemental
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recovery {
    /// A - system recovers automatically
    #[serde(rename = "A")]
    Automatic,
    /// U - recovery requires manual intervention
    #[serde(rename = "U")]
    User,
    /// I - recovery is not possible
    #[serde(rename = "I")]
    Irrecoverable,
    #[default]
    #[serde(rename = "X")]
    NotDefined,
}

impl Recovery {
    pub fn weight(&self) -> f64 {
        match self {
            Recovery::Automatic => 0.9,
            Recovery::User => 1.0,
            Recovery::Irrecoverable => 1.1,
            Recovery::NotDefined => 1.0,
        }
    }
}

impl MetricValue for Recovery {
    fn code(&self) -> &'static str {
        match self {
            Recovery::Automatic => "A",
            Recovery::User => "U",
            Recovery::Irrecoverable => "I",
            Recovery::NotDefined => "X",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Recovery::Automatic),
            "U" => Some(Recovery::User),
            "I" => Some(Recovery::Irrecoverable),
            "X" => Some(Recovery::NotDefined),
            _ => None,
        }
    }
}

/// Value Density (V) - supplemental
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueDensity {
    /// C - single exploitation event yields concentrated resources
    #[serde(rename = "C")]
    Concentrated,
    #[serde(rename = "D")]
    Diffuse,
    #[default]
    #[serde(rename = "X")]
    NotDefined,
}

impl ValueDensity {
    pub fn weight(&self) -> f64 {
        match self {
            ValueDensity::Concentrated => 1.1,
            ValueDensity::Diffuse => 0.9,
            ValueDensity::NotDefined => 1.0,
        }
    }
}

impl MetricValue for ValueDensity {
    fn code(&self) -> &'static str {
        match self {
            ValueDensity::Concentrated => "C",
            ValueDensity::Diffuse => "D",
            ValueDensity::NotDefined => "X",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "C" => Some(ValueDensity::Concentrated),
            "D" => Some(ValueDensity::Diffuse),
            "X" => Some(ValueDensity::NotDefined),
            _ => None,
        }
    }
}

/// Vulnerability Response Effort (RE) - supplemental
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseEffort {
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "M")]
    Moderate,
    #[serde(rename = "H")]
    High,
    #[default]
    #[serde(rename = "X")]
    NotDefined,
}

impl ResponseEffort {
    pub fn weight(&self) -> f64 {
        match self {
            ResponseEffort::Low => 0.9,
            ResponseEffort::Moderate => 1.0,
            ResponseEffort::High => 1.1,
            ResponseEffort::NotDefined => 1.0,
        }
    }
}

impl MetricValue for ResponseEffort {
    fn code(&self) -> &'static str {
        match self {
            ResponseEffort::Low => "L",
            ResponseEffort::Moderate => "M",
            ResponseEffort::High => "H",
            ResponseEffort::NotDefined => "X",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "L" => Some(ResponseEffort::Low),
            "M" => Some(ResponseEffort::Moderate),
            "H" => Some(ResponseEffort::High),
            "X" => Some(ResponseEffort::NotDefined),
            _ => None,
        }
    }
}

/// Provider Urgency (U) - supplemental, supplier-assessed remediation urgency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderUrgency {
    #[serde(rename = "C")]
    Clear,
    #[serde(rename = "G")]
    Green,
    #[serde(rename = "A")]
    Amber,
    #[serde(rename = "R")]
    Red,
    #[default]
    #[serde(rename = "X")]
    NotDefined,
}

impl ProviderUrgency {
    pub fn weight(&self) -> f64 {
        match self {
            ProviderUrgency::Clear => 0.8,
            ProviderUrgency::Green => 0.9,
            ProviderUrgency::Amber => 1.0,
            ProviderUrgency::Red => 1.1,
            ProviderUrgency::NotDefined => 1.0,
        }
    }
}

impl MetricValue for ProviderUrgency {
    fn code(&self) -> &'static str {
        match self {
            ProviderUrgency::Clear => "C",
            ProviderUrgency::Green => "G",
            ProviderUrgency::Amber => "A",
            ProviderUrgency::Red => "R",
            ProviderUrgency::NotDefined => "X",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "C" => Some(ProviderUrgency::Clear),
            "G" => Some(ProviderUrgency::Green),
            "A" => Some(ProviderUrgency::Amber),
            "R" => Some(ProviderUrgency::Red),
            "X" => Some(ProviderUrgency::NotDefined),
            _ => None,
        }
    }
}

/// Environmental override of a base or threat metric.
///
/// `NotDefined` (code `X`) means "inherit the corresponding base value";
/// every modified field resolves through [`Modified::resolve`] before any
/// weight is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modified<T> {
    NotDefined,
    Defined(T),
}

impl<T> Default for Modified<T> {
    fn default() -> Self {
        Modified::NotDefined
    }
}

impl<T: Copy> Modified<T> {
    /// Effective value: the override when defined, otherwise the base value.
    pub fn resolve(&self, base: T) -> T {
        match self {
            Modified::NotDefined => base,
            Modified::Defined(value) => *value,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Modified::Defined(_))
    }
}

impl<T: MetricValue> MetricValue for Modified<T> {
    fn code(&self) -> &'static str {
        match self {
            Modified::NotDefined => "X",
            Modified::Defined(value) => value.code(),
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        if code == "X" {
            Some(Modified::NotDefined)
        } else {
            T::from_code(code).map(Modified::Defined)
        }
    }
}

impl<T: MetricValue> Serialize for Modified<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de, T: MetricValue> Deserialize<'de> for Modified<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Modified::from_code(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown metric code `{}`", code)))
    }
}
