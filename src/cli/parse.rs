use std::fs;
use std::io::Read;
use std::path::Path;

use crate::config::Config;
use crate::output::json::{write_export, ReportExport};
use crate::parser::{ReportParser, RiskLevel};

use super::ParseArgs;

pub fn execute(args: ParseArgs) -> anyhow::Result<()> {
    let markdown = read_input(args.file.as_deref())?;
    let parser = build_parser(args.config.as_deref())?;

    let report = parser.parse(&markdown);
    tracing::debug!("classified risk level: {}", report.risk_level);

    let export = ReportExport::new(report, &markdown);
    write_export(&export, args.output.as_deref(), args.compact)?;

    if args.fail_on_high && export.record.risk_level == RiskLevel::High {
        tracing::warn!("report classified High, failing per --fail-on-high");
        std::process::exit(1);
    }

    Ok(())
}

pub(super) fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

pub(super) fn build_parser(config: Option<&Path>) -> anyhow::Result<ReportParser> {
    match config {
        Some(path) => {
            let config = Config::load(path)?;
            config.validate()?;
            Ok(ReportParser::from_config(&config))
        }
        None => Ok(ReportParser::default()),
    }
}
