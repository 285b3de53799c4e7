use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod location;
mod output;
mod parser;
mod prompt;
mod provider;
mod source;

#[cfg(test)]
mod test_server;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("reviewsense=debug")
    } else {
        EnvFilter::new("reviewsense=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze(args) => cli::analyze::execute(args).await,
        Commands::Parse(args) => cli::parse::execute(args),
        Commands::PlaceId(args) => cli::place_id::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
