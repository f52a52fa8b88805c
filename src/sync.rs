use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parser::{fingerprint, ParsedReport, RiskLevel};

/// The row shape a persistence layer writes for a completed analysis.
///
/// The stored concern level is copied from the parsed report's closed enum,
/// so the dashboard's stored value and the chat view's computed value cannot
/// diverge. Legacy textual labels only re-enter through
/// `RiskLevel::from_str`, which folds "Moderate" into `Medium`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoredReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub risk_level: RiskLevel,
    pub fingerprint: String,
    pub markdown: String,
}

impl StoredReport {
    pub fn new(report: &ParsedReport, markdown: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            risk_level: report.risk_level,
            fingerprint: fingerprint(markdown),
            markdown: markdown.to_string(),
        }
    }
}
