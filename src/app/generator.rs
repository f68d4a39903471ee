//! One-shot manifest generation
//!
//! Ties the walker, the assembler and the writer together. Every run rebuilds
//! the manifest from scratch.

use std::path::PathBuf;

use chrono::Utc;
use tracing::info;

use crate::app::config::ScanConfig;
use crate::app::manifest::write_manifest;
use crate::app::models::{Manifest, ScanWarning};
use crate::app::walker::TreeWalker;
use crate::errors::{AppError, Result};

/// Result of scanning an archive tree
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub manifest: Manifest,
    pub warnings: Vec<ScanWarning>,
}

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub manifest: Manifest,
    pub warnings: Vec<ScanWarning>,
    /// Where the manifest was written, `None` on a dry run
    pub output_path: Option<PathBuf>,
}

/// Builds and writes the manifest for one archive root
#[derive(Debug, Clone)]
pub struct ManifestGenerator {
    config: ScanConfig,
}

impl ManifestGenerator {
    /// Create a generator, validating the configuration
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate().map_err(AppError::generic)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk the tree and assemble the manifest without writing it
    pub fn scan(&self) -> Result<ScanOutcome> {
        let walked = TreeWalker::new(&self.config).walk()?;
        let manifest = Manifest::assemble(walked.records, Utc::now());

        Ok(ScanOutcome {
            manifest,
            warnings: walked.warnings,
        })
    }

    /// Write a manifest to the configured output path
    pub fn write(&self, manifest: &Manifest) -> Result<PathBuf> {
        let output_path = self.config.output_path();
        write_manifest(manifest, &output_path)?;
        Ok(output_path)
    }

    /// Scan, then write unless `dry_run` is set
    pub fn run(&self, dry_run: bool) -> Result<GenerationReport> {
        let ScanOutcome { manifest, warnings } = self.scan()?;

        let output_path = if dry_run {
            info!("Dry run: not writing manifest");
            None
        } else {
            Some(self.write(&manifest)?)
        };

        Ok(GenerationReport {
            manifest,
            warnings,
            output_path,
        })
    }
}
