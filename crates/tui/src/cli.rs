//! Command-line argument parsing for cfctl.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Resolving the config path or log directory (see `cfctl_config`).
//!
//! Invariants:
//! - There are no subcommands; the binary always starts the interactive UI.
//! - `--account` only affects this run and is never persisted.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for cfctl.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --config, --account)
/// 2. Environment variables (e.g., CFCTL_CONFIG, CFCTL_LOG_DIR)
/// 3. The config file at `~/.config/cfctl/config.yaml`
#[derive(Debug, Parser)]
#[command(
    name = "cfctl",
    about = "Interactive terminal client for the Cloudflare CDN API",
    version,
    after_help = "Examples:\n  cfctl\n  cfctl --account production\n  cfctl --config /etc/cfctl/config.yaml\n  cfctl --debug --log-dir /tmp/cfctl-logs\n"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, short = 'c', env = "CFCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Account to use for this session instead of the default
    #[arg(long, short = 'a')]
    pub account: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Only log warnings and errors; suppress startup errors on stderr
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Directory for log files
    #[arg(long, env = "CFCTL_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}
