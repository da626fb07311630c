//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect Maven projects the way the WebObjects bundle loader sees them
#[derive(Parser, Debug)]
#[command(
    name = "maven-bundle-adaptor",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve WebObjects bundles from Maven project descriptors",
    long_about = "Locates the Maven project enclosing a path and reports what the bundle loader \
                  would register for it: bundle type, name, version, compiled classes, resource \
                  directories and properties.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  maven-bundle-adaptor locate                 \x1b[90m# Bundle root enclosing the current directory\x1b[0m\n   \
                  maven-bundle-adaptor info ./MyApp --json    \x1b[90m# Bundle info as the loader's dictionary\x1b[0m\n   \
                  maven-bundle-adaptor classes ./ERCore       \x1b[90m# Compiled classes of a framework\x1b[0m\n   \
                  maven-bundle-adaptor resources              \x1b[90m# Resource directories, including inherited ones\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Layout configuration file (YAML)
    #[arg(long, short = 'c', global = true, env = "MAVEN_BUNDLE_ADAPTOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug) logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the bundle root enclosing a path
    Locate(PathArgs),

    /// Show bundle information
    Info(InfoArgs),

    /// List compiled classes
    Classes(PathArgs),

    /// List resource directories
    Resources(PathArgs),

    /// Show bundle properties
    Properties(PropertiesArgs),

    /// Show version information
    Version,
}

/// Arguments for commands that only take a path
#[derive(Parser, Debug)]
pub struct PathArgs {
    /// Path inside the project (defaults to current directory)
    pub path: Option<PathBuf>,
}

/// Arguments for the info command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show bundle information:\n    maven-bundle-adaptor info ./MyApp\n\n\
                  Print the loader dictionary as JSON:\n    maven-bundle-adaptor info ./MyApp --json")]
pub struct InfoArgs {
    /// Path inside the project (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Print the bundle dictionary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the properties command
#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    /// Path inside the project (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Print properties as a JSON object
    #[arg(long)]
    pub json: bool,
}
