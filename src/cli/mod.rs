//! Command-line interface components
//!
//! This module contains CLI-specific code: argument parsing, command
//! handlers, and console reporting.

pub mod args;
pub mod commands;
pub mod report;

pub use args::{
    Cli, Commands, GenerateArgs, GlobalArgs, PoiArgs, PoiCommand, ResolveArgs, SearchArgs,
};
pub use commands::{describe_token, handle_generate, handle_poi, handle_resolve, handle_search};
pub use report::{format_poi_document, format_search_results, format_summary, format_warnings};
