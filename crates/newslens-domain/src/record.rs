//! Impact record - the fundamental output of an analysis run

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the assessed impact on a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactType {
    /// The news is expected to benefit the company
    Positive,
    /// The news is expected to harm the company
    Negative,
}

impl ImpactType {
    /// Parse from the literal the model is instructed to emit
    /// ("positive" or "negative"); anything else is out of domain.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(ImpactType::Positive),
            "negative" => Some(ImpactType::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for ImpactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactType::Positive => write!(f, "positive"),
            ImpactType::Negative => write!(f, "negative"),
        }
    }
}

/// Whether the company is listed on BSE/NSE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Listed {
    /// Listed
    Y,
    /// Not listed
    N,
}

impl Listed {
    /// Parse from the literal the model is instructed to emit ("Y" or "N").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Y" => Some(Listed::Y),
            "N" => Some(Listed::N),
            _ => None,
        }
    }
}

impl fmt::Display for Listed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Listed::Y => write!(f, "Y"),
            Listed::N => write!(f, "N"),
        }
    }
}

/// Maximum valid impact score (inclusive)
pub const MAX_IMPACT_SCORE: u8 = 10;

/// One structured assessment of a company's exposure to analyzed content
///
/// Records are produced only by the extractor, from validated model
/// output, and are immutable once produced. They have no identity beyond
/// their field values. The serde field renames are the export contract:
/// downstream consumers of the exported JSON see exactly these keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactRecord {
    /// Exact name of the company
    #[serde(rename = "company name")]
    pub company_name: String,

    /// Direction of the impact
    #[serde(rename = "impact type")]
    pub impact_type: ImpactType,

    /// Industry sector the company operates in
    #[serde(rename = "company industry")]
    pub industry: String,

    /// Impact score from 0 (none) to 10 (highest)
    #[serde(rename = "impact score")]
    pub impact_score: u8,

    /// BSE/NSE listing status
    pub listed: Listed,
}

impl ImpactRecord {
    /// Check the field-domain invariants that the source (free-form model
    /// output) does not guarantee.
    pub fn validate(&self) -> Result<(), String> {
        if self.company_name.trim().is_empty() {
            return Err("company name is empty".to_string());
        }
        if self.impact_score > MAX_IMPACT_SCORE {
            return Err(format!(
                "impact score {} out of range [0, {}]",
                self.impact_score, MAX_IMPACT_SCORE
            ));
        }
        Ok(())
    }
}
