//! CLI argument definitions for `RoadmapTracker`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logger::Level;
use roadmap_tracker::config::ConfigOverrides;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `base_url`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum ProgressSubcommand {
    /// Export the full progress record for a path as JSON.
    Export {
        /// Path slug (e.g., `software-engineering`)
        #[arg(value_name = "SLUG")]
        slug: String,

        /// Output file path (prints to stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Import a previously exported progress record, replacing the path's progress.
    Import {
        /// Path slug
        #[arg(value_name = "SLUG")]
        slug: String,

        /// File containing the exported JSON payload
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Print a shareable URL carrying the path's non-default progress.
    Share {
        /// Path slug
        #[arg(value_name = "SLUG")]
        slug: String,
    },
    /// Apply progress embedded in a shareable URL.
    Load {
        /// Shareable URL containing a `share` parameter
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Push a path's progress to the configured backend (placeholder).
    Sync {
        /// Path slug
        #[arg(value_name = "SLUG")]
        slug: String,
    },
    /// Pull a path's progress from the configured backend (placeholder).
    Pull {
        /// Path slug
        #[arg(value_name = "SLUG")]
        slug: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List all roadmap paths with progress.
    List,
    /// Show one path as a checklist, optionally with graph layout.
    Show {
        /// Path slug (e.g., `software-engineering`)
        #[arg(value_name = "SLUG")]
        slug: String,

        /// Also print the computed graph layout (levels, positions, edges)
        #[arg(long)]
        graph: bool,

        /// Toggle visibility of a group before rendering
        #[arg(long, value_name = "GROUP")]
        toggle_group: Option<String>,
    },
    /// Record a status for one course node.
    Mark {
        /// Path slug
        #[arg(value_name = "SLUG")]
        slug: String,

        /// Node id (e.g., `cs301`)
        #[arg(value_name = "NODE")]
        node: String,

        /// New status: not-started, in-progress, completed, or skipped
        #[arg(value_name = "STATUS")]
        status: String,
    },
    /// Export, import, share, or sync progress.
    Progress {
        #[command(subcommand)]
        subcommand: ProgressSubcommand,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "roadmaps",
    about = "RoadmapTracker command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config backend sync token
    #[arg(long = "sync-token", value_name = "TOKEN")]
    pub sync_token: Option<String>,

    /// Override config backend sync endpoint
    #[arg(long = "sync-endpoint", value_name = "URL")]
    pub sync_endpoint: Option<String>,

    /// Override config shareable URL origin
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Override config catalog feed file
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Override config data directory
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            sync_token: self.sync_token.clone(),
            sync_endpoint: self.sync_endpoint.clone(),
            base_url: self.base_url.clone(),
            catalog_file: self
                .catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
