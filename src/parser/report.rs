use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Preliminary concern level derived from the executive summary.
///
/// Deliberately a closed three-value enum: the product has no "unknown"
/// state. Anything the classifier cannot place resolves to `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            // Legacy rows stored "Moderate" where the schema says "Medium"
            "medium" | "moderate" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!("Unknown risk level: {}", s)),
        }
    }
}

/// Structured view of one report, one value per parse call, never mutated.
/// Every field has a documented default so a report is always fully formed
/// even when the source markdown is sparse or malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParsedReport {
    pub executive_summary: String,

    #[serde(default)]
    pub risk_level: RiskLevel,

    #[serde(default)]
    pub detailed_analysis: DetailedAnalysis,

    #[serde(default)]
    pub reasoning: Reasoning,

    #[serde(default)]
    pub recommendations: Vec<String>,

    #[serde(default)]
    pub red_flags: Vec<String>,

    #[serde(default)]
    pub care_advice: String,

    #[serde(default)]
    pub doctor_summary: String,
}

/// Per-modality findings from section 2. A field is absent when the source
/// omitted the label or filled it with "not provided" boilerplate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DetailedAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

impl DetailedAnalysis {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.image.is_none() && self.audio.is_none() && self.document.is_none()
    }
}

/// Section 3 prose blocks. Always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Reasoning {
    #[serde(default)]
    pub observations: String,

    #[serde(default)]
    pub possibilities: String,

    #[serde(default)]
    pub limitations: String,
}

/// Deterministic fingerprint of the raw report markdown for deduplication
/// on re-submission. Whitespace is collapsed so reflowed model output maps
/// to the same record.
pub fn fingerprint(markdown: &str) -> String {
    let normalized = markdown.split_whitespace().collect::<Vec<_>>().join(" ");
    let hash = Sha256::digest(normalized.as_bytes());
    format!("{:x}", hash)[..12].to_string()
}
