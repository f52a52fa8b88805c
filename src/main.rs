use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod output;
mod parser;
mod sync;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("triagemd=debug")
    } else {
        EnvFilter::new("triagemd=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Parse(args) => cli::parse::execute(args),
        Commands::Render(args) => cli::render::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
