//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// motion-demo - a terminal catalog of small motion examples
#[derive(Parser, Debug)]
#[command(name = "motion-demo")]
#[command(version)]
#[command(about = "A terminal catalog of small motion examples", long_about = None)]
pub struct Args {
    /// Start on the detail view of this example (exact catalog name)
    #[arg(long, value_name = "NAME")]
    pub open: Option<String>,

    /// Print the example catalog and exit
    #[arg(long)]
    pub list: bool,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Determine the log level from command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - The verbose flag overrides `--log-level`.
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
