use crate::output::markdown::write_rendered;

use super::parse::{build_parser, read_input};
use super::RenderArgs;

pub fn execute(args: RenderArgs) -> anyhow::Result<()> {
    let markdown = read_input(args.file.as_deref())?;
    let parser = build_parser(args.config.as_deref())?;

    let report = parser.parse(&markdown);
    write_rendered(&report, args.output.as_deref())?;

    Ok(())
}
