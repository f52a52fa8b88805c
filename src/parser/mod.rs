mod labels;
mod lists;
mod report;
mod risk;
mod sections;

pub use labels::{Field, LanguageTable};
pub use report::{fingerprint, DetailedAnalysis, ParsedReport, Reasoning, RiskLevel};

use crate::config::Config;

/// Parse report markdown with the built-in English and French label packs.
pub fn parse_report(markdown: &str) -> ParsedReport {
    ReportParser::default().parse(markdown)
}

/// Total, pure markdown-to-structure transformer. Holds only the merged
/// language table; every `parse` call allocates a fresh report, so a single
/// parser is safe to share across request flows.
#[derive(Debug, Clone, Default)]
pub struct ReportParser {
    table: LanguageTable,
}

impl ReportParser {
    pub fn from_config(config: &Config) -> Self {
        let mut table = LanguageTable::default();
        for pack in &config.languages {
            table.register(pack);
        }
        Self { table }
    }

    /// Accepts any string and always returns a fully-formed report. Missing
    /// or malformed sections degrade to their documented defaults; there is
    /// no error path.
    pub fn parse(&self, markdown: &str) -> ParsedReport {
        let sections = sections::split_sections(markdown);

        let found = sections.iter().filter(|s| !s.is_empty()).count();
        if found == 0 && !markdown.trim().is_empty() {
            tracing::warn!("no numbered section markers found in report output");
        } else {
            tracing::debug!(
                "extracted {} of {} report sections",
                found,
                sections::SECTION_COUNT
            );
        }

        let detailed_analysis = DetailedAnalysis {
            text: self.table.extract(sections[1], Field::Text),
            image: self.table.extract(sections[1], Field::Image),
            audio: self.table.extract(sections[1], Field::Audio),
            document: self.table.extract(sections[1], Field::Document),
        };

        let reasoning = Reasoning {
            observations: self
                .table
                .extract(sections[2], Field::Observations)
                .unwrap_or_default(),
            possibilities: self
                .table
                .extract(sections[2], Field::Possibilities)
                .unwrap_or_default(),
            limitations: self
                .table
                .extract(sections[2], Field::Limitations)
                .unwrap_or_default(),
        };

        ParsedReport {
            executive_summary: sections[0].to_string(),
            risk_level: risk::classify(sections[0], &self.table),
            detailed_analysis,
            reasoning,
            recommendations: lists::extract_items(sections[3]),
            red_flags: lists::extract_red_flags(sections[4], self.table.red_flag_denylist()),
            care_advice: sections[5].to_string(),
            doctor_summary: sections[6].to_string(),
        }
    }
}
