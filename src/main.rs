//! Monte Carlo CLI
//!
//! Command-line access to the Monte Carlo GraphQL API

use clap::Parser;
use montecarlo_client::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging; --verbose surfaces the request/response dumps
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        cli.log_level.into()
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
