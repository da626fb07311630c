//! maven-bundle-adaptor - inspect Maven projects as WebObjects bundles
//!
//! A command line front end over [`maven_bundle_adaptor::MavenBundleAdaptor`]
//! showing what the bundle loader would register for a project.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use maven_bundle_adaptor::{AdaptorConfig, MavenBundleAdaptor, Result};

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Install the stderr log subscriber; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if matches!(cli.command, Commands::Version) {
        return commands::version::run();
    }

    let config = AdaptorConfig::load_or_default(cli.config.as_deref())?;
    let adaptor = MavenBundleAdaptor::with_config(config);

    match cli.command {
        Commands::Locate(args) => commands::locate::run(&adaptor, args),
        Commands::Info(args) => commands::info::run(&adaptor, args),
        Commands::Classes(args) => commands::classes::run(&adaptor, args),
        Commands::Resources(args) => commands::resources::run(&adaptor, args),
        Commands::Properties(args) => commands::properties::run(&adaptor, args),
        Commands::Version => commands::version::run(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
