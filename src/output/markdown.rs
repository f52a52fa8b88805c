use std::fs;
use std::path::Path;

use crate::error::OutputError;
use crate::parser::ParsedReport;

/// Render the parsed report as a readable markdown view: risk badge up top,
/// then one block per populated section. Absent analysis fields and empty
/// reasoning blocks are omitted rather than rendered as boilerplate.
pub fn render_report(report: &ParsedReport) -> String {
    let mut content = String::new();

    content.push_str("# Health Analysis Report\n\n");

    // Metadata table
    content.push_str("| Field | Value |\n");
    content.push_str("|-------|-------|\n");
    content.push_str(&format!("| Risk Level | {} |\n", report.risk_level));
    content.push_str(&format!(
        "| Recommendations | {} |\n",
        report.recommendations.len()
    ));
    content.push_str(&format!("| Red Flags | {} |\n", report.red_flags.len()));
    content.push_str("\n---\n\n");

    if !report.executive_summary.is_empty() {
        content.push_str("## Executive Summary\n\n");
        content.push_str(&format!("{}\n\n", report.executive_summary));
    }

    let analysis = [
        ("Text", report.detailed_analysis.text.as_deref()),
        ("Image", report.detailed_analysis.image.as_deref()),
        ("Audio", report.detailed_analysis.audio.as_deref()),
        ("Document", report.detailed_analysis.document.as_deref()),
    ];
    if !report.detailed_analysis.is_empty() {
        content.push_str("## Detailed Analysis\n\n");
        for (name, value) in analysis {
            if let Some(value) = value {
                content.push_str(&format!("- **{}:** {}\n", name, value));
            }
        }
        content.push('\n');
    }

    let reasoning = [
        ("Key Observations", &report.reasoning.observations),
        ("Possibilities", &report.reasoning.possibilities),
        ("Limitations", &report.reasoning.limitations),
    ];
    if reasoning.iter().any(|(_, value)| !value.is_empty()) {
        content.push_str("## Reasoning\n\n");
        for (name, value) in reasoning {
            if !value.is_empty() {
                content.push_str(&format!("**{}:** {}\n\n", name, value));
            }
        }
    }

    if !report.recommendations.is_empty() {
        content.push_str("## Recommendations\n\n");
        for item in &report.recommendations {
            content.push_str(&format!("- [ ] {}\n", item));
        }
        content.push('\n');
    }

    // An empty list means nothing concerning was reported; the block is
    // omitted rather than rendered as an empty alert.
    if !report.red_flags.is_empty() {
        content.push_str("## Red Flags\n\n");
        for item in &report.red_flags {
            content.push_str(&format!("- {}\n", item));
        }
        content.push('\n');
    }

    if !report.care_advice.is_empty() {
        content.push_str("## When to Seek Care\n\n");
        content.push_str(&format!("{}\n\n", report.care_advice));
    }

    if !report.doctor_summary.is_empty() {
        content.push_str("## Physician Summary\n\n");
        content.push_str(&format!("{}\n", report.doctor_summary));
    }

    content
}

/// Write the rendered view to a file, or stdout when no path is given.
pub fn write_rendered(report: &ParsedReport, output: Option<&Path>) -> Result<(), OutputError> {
    let rendered = render_report(report);
    match output {
        Some(path) => fs::write(path, rendered).map_err(OutputError::WriteReport)?,
        None => println!("{}", rendered),
    }
    Ok(())
}
