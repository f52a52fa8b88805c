pub mod parse;
pub mod render;
pub mod schema;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "triagemd")]
#[command(
    author,
    version,
    about = "Structured report parser for LLM-generated health triage markdown"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse report markdown into a structured JSON export
    Parse(ParseArgs),

    /// Render report markdown as a readable report view
    Render(RenderArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct ParseArgs {
    /// Markdown file to parse (stdin if omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Language-pack config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Exit 1 if the classified risk level is High (CI mode)
    #[arg(long)]
    pub fail_on_high: bool,
}

#[derive(Parser, Clone)]
pub struct RenderArgs {
    /// Markdown file to render (stdin if omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Language-pack config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the rendered view here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
