use anyhow::Result;
use clap::Parser;
use suncoast::cli::Cli;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}

/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "suncoast=debug"
    } else {
        "suncoast=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
