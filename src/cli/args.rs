//! Command-line argument parsing for the archive manifest builder
//!
//! This module defines the CLI structure using clap derive macros. Running
//! the binary without a subcommand generates the manifest.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Archive Manifest - index versioned map images
#[derive(Parser, Debug)]
#[command(
    name = "archive_manifest",
    version,
    about = "Build manifest.json for a chapter/season/version map archive",
    long_about = "Walks chapter_<N>/season_<M>/<version> folders, detects each version's map image and POI file,
flags naming inconsistencies, and writes a manifest sorted newest first."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the archive and write the manifest
    Generate(GenerateArgs),

    /// Find versions whose POI file lists a matching location
    Search(SearchArgs),

    /// Show how version tokens parse and which season they fall in
    Resolve(ResolveArgs),

    /// Inspect or edit a POI file
    Poi(PoiArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Archive root directory
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Manifest file name written at the root
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// Warn when a folder's chapter/season disagrees with the version table
    #[arg(long)]
    pub cross_check: bool,

    /// Scan and report without writing the manifest
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the search command
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Text to look for in location names (case-insensitive)
    #[arg(value_name = "TEXT")]
    pub query: String,

    /// Archive root directory
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Version tokens such as 1_6_0, 33_00 or 13_20-(water-lvl-4)
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,
}

/// Arguments for the poi command
#[derive(Args, Debug, Clone)]
pub struct PoiArgs {
    #[command(subcommand)]
    pub action: PoiCommand,
}

/// Edits on a single POI file
#[derive(Subcommand, Debug, Clone)]
pub enum PoiCommand {
    /// List the locations and categories of a POI file
    Show {
        /// POI file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Add a location, keeping the list sorted
    AddLocation {
        /// POI file path (created if missing)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Location name
        name: String,
    },

    /// Rename an existing location
    RenameLocation {
        /// POI file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Current name
        from: String,
        /// New name
        to: String,
    },

    /// Remove a location
    RemoveLocation {
        /// POI file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Location name
        name: String,
    },

    /// Add or replace a category
    SetCategory {
        /// POI file path (created if missing)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Category name
        name: String,
        /// Value: true/false, an integer, JSON, or plain text
        #[arg(default_value = "")]
        value: String,
        /// Treat the value as a comma-separated list of items
        #[arg(long)]
        list: bool,
    },

    /// Remove a category
    RemoveCategory {
        /// POI file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Category name
        name: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level, falling back to `configured` without flags
    pub fn log_level(&self, configured: tracing::Level) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            configured
        }
    }

    /// The command to run, `generate` with defaults if none was given
    pub fn command_or_default(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()))
    }
}

impl GenerateArgs {
    /// Check argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if let Some(output) = &self.output {
            if output.is_empty() || output.contains(['/', '\\']) {
                return Err(format!(
                    "--output must be a file name, not a path: '{}'",
                    output
                ));
            }
        }
        Ok(())
    }
}
