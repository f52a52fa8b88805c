use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::OutputError;
use crate::parser::ParsedReport;
use crate::sync::StoredReport;

/// What `triagemd parse` emits: the persistence record plus the full parsed
/// view, in one envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportExport {
    #[serde(flatten)]
    pub record: StoredReport,
    pub report: ParsedReport,
}

impl ReportExport {
    pub fn new(report: ParsedReport, markdown: &str) -> Self {
        Self {
            record: StoredReport::new(&report, markdown),
            report,
        }
    }
}

/// Write the export as JSON to a file, or stdout when no path is given.
pub fn write_export(
    export: &ReportExport,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), OutputError> {
    let json = if compact {
        serde_json::to_string(export)?
    } else {
        serde_json::to_string_pretty(export)?
    };

    match output {
        Some(path) => fs::write(path, json).map_err(OutputError::WriteReport)?,
        None => println!("{}", json),
    }

    Ok(())
}
