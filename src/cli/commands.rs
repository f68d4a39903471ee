//! Command handlers for the archive manifest CLI
//!
//! This module connects parsed CLI arguments and loaded configuration to the
//! core application functionality.

use std::time::Instant;

use tracing::{debug, info};

use crate::app::{
    edit_poi_file, parse_category_items, parse_category_value, parse_version,
    resolve_chapter_season, search_locations, version_to_display, ManifestGenerator, PoiDocument,
    PoiEdit, ScanConfig,
};
use crate::cli::report::{
    format_poi_document, format_search_results, format_summary, format_warnings,
};
use crate::cli::{GenerateArgs, PoiArgs, PoiCommand, ResolveArgs, SearchArgs};
use crate::config::AppConfig;
use crate::errors::{AppError, Result};

/// Handle the generate command
///
/// Builds the runtime configuration (config file, then environment, then CLI
/// flags), scans the archive and writes the manifest.
pub fn handle_generate(args: GenerateArgs, config: &AppConfig) -> Result<()> {
    let start_time = Instant::now();
    args.validate().map_err(AppError::generic)?;

    let scan_config = scan_config_for(&args, config);
    info!(
        "Generating manifest for {} (cross-check: {})",
        scan_config.root.display(),
        scan_config.cross_check_seasons
    );

    let planned_output = scan_config.output_path();
    let generator = ManifestGenerator::new(scan_config)?;
    let report = generator.run(args.dry_run)?;

    eprint!("{}", format_warnings(&report.warnings));
    if !report.warnings.is_empty() {
        eprintln!();
    }
    print!("{}", format_summary(&report, &planned_output));

    info!("Manifest generation finished in {:?}", start_time.elapsed());
    Ok(())
}

/// Handle the search command
pub fn handle_search(args: SearchArgs, config: &AppConfig) -> Result<()> {
    let root = args
        .root
        .clone()
        .unwrap_or_else(|| config.to_runtime_config().root);
    debug!("Searching POI files under {}", root.display());

    let matches = search_locations(&root, &args.query)?;
    print!("{}", format_search_results(&args.query, &matches));
    Ok(())
}

/// Handle the resolve command
pub fn handle_resolve(args: ResolveArgs) -> Result<()> {
    for token in &args.tokens {
        println!("{}", describe_token(token));
    }
    Ok(())
}

/// Handle the poi command
pub fn handle_poi(args: PoiArgs) -> Result<()> {
    let (file, edit) = match args.action {
        PoiCommand::Show { file } => {
            let doc = PoiDocument::load(&file)?;
            print!("{}", format_poi_document(&file, &doc));
            return Ok(());
        }
        PoiCommand::AddLocation { file, name } => (file, PoiEdit::AddLocation { name }),
        PoiCommand::RenameLocation { file, from, to } => {
            (file, PoiEdit::RenameLocation { from, to })
        }
        PoiCommand::RemoveLocation { file, name } => (file, PoiEdit::RemoveLocation { name }),
        PoiCommand::SetCategory {
            file,
            name,
            value,
            list,
        } => {
            let value = if list {
                parse_category_items(&value)
            } else {
                parse_category_value(&value)
            };
            (file, PoiEdit::SetCategory { name, value })
        }
        PoiCommand::RemoveCategory { file, name } => (file, PoiEdit::RemoveCategory { name }),
    };

    debug!("Applying '{}' to {}", edit, file.display());
    if edit_poi_file(&file, &edit)? {
        println!("✅ Saved {}: {}", file.display(), edit);
    } else {
        println!("No change to {}: {}", file.display(), edit);
    }
    Ok(())
}

/// One-line description of how a token parses and resolves
pub fn describe_token(token: &str) -> String {
    let display = version_to_display(token);
    match parse_version(token) {
        Some(version) => {
            let grouping = resolve_chapter_season(version)
                .map(|cs| cs.to_string())
                .unwrap_or_else(|| "ungrouped".to_string());
            format!("{} -> {} (rank {}) -> {}", token, display, version, grouping)
        }
        None => format!("{} -> {} -> unrecognized", token, display),
    }
}

/// Apply CLI flags on top of the loaded configuration
fn scan_config_for(args: &GenerateArgs, config: &AppConfig) -> ScanConfig {
    let mut scan_config = config.to_runtime_config();

    if let Some(root) = &args.root {
        scan_config.root = root.clone();
    }
    if let Some(output) = &args.output {
        scan_config.output_file_name = output.clone();
    }
    if args.cross_check {
        scan_config.cross_check_seasons = true;
    }

    scan_config
}
