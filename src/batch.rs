//! Directory batch scanning with annotated output images.
//!
//! Findings are printed to stdout as they happen; diagnostics go through
//! the logger. One failing file never aborts the run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::annotate::Annotator;
use crate::engine::Engine;
use crate::error::BatchError;
use crate::models::{Candidate, Detection};

/// Suffix appended to annotated output images
const OUTPUT_SUFFIX: &str = "_detected";
/// Extensions collected by the directory scan (case-insensitive)
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Outcome of scanning one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Scanned image path
    pub path: PathBuf,
    /// Distinct (value, symbology) pairs found across all variants
    pub findings: Vec<Candidate>,
    /// Plurality winner, when anything was found
    pub winner: Option<Detection>,
    /// Where the annotated copy was written, when anything was found
    pub annotated: Option<PathBuf>,
}

/// Collect scannable image paths in `dir`, sorted for a deterministic run
/// order. Outputs of previous runs (`*_detected.png`) are skipped so a
/// rescan does not feed on its own artifacts.
pub fn collect_images(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            continue;
        };
        if !IMAGE_EXTENSIONS
            .iter()
            .any(|want| ext.eq_ignore_ascii_case(want))
        {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            if stem.ends_with(OUTPUT_SUFFIX) {
                continue;
            }
        }
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

/// Scan one file with the extended variant set and write the annotated
/// copy beside it when anything was found.
pub fn process_file(
    engine: &Engine,
    annotator: &Annotator,
    path: &Path,
) -> Result<FileReport, BatchError> {
    let image = image::open(path).map_err(BatchError::Load)?;
    let scan = engine.scan_extended(&image);
    if scan.fallback_used && !scan.located.is_empty() {
        info!(path = %path.display(), "high-contrast fallback rescued the file");
    }

    let mut annotated = None;
    if !scan.located.is_empty() {
        let mut canvas = image.to_rgb8();
        annotator.draw(&mut canvas, &scan.located);
        let out_path = annotated_path(path);
        canvas.save(&out_path).map_err(BatchError::Save)?;
        annotated = Some(out_path);
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        findings: scan.findings,
        winner: scan.winner,
        annotated,
    })
}

/// Scan every image in `dir`, printing findings as they happen.
///
/// Returns one report per collected file; files that failed to load or
/// save keep an empty finding list so callers can still account for them.
pub fn run_directory(
    engine: &Engine,
    annotator: &Annotator,
    dir: &Path,
) -> io::Result<Vec<FileReport>> {
    let paths = collect_images(dir)?;
    info!(dir = %dir.display(), files = paths.len(), "batch scan starting");

    let mut reports = Vec::with_capacity(paths.len());
    for path in &paths {
        println!("Processing {}...", path.display());
        match process_file(engine, annotator, path) {
            Ok(report) => {
                if report.findings.is_empty() {
                    println!("  no barcodes found");
                } else {
                    for finding in &report.findings {
                        println!("  {finding}");
                    }
                    if let Some(out_path) = &report.annotated {
                        println!("  annotated image saved to {}", out_path.display());
                    }
                }
                reports.push(report);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping file");
                println!("  error: {err}");
                reports.push(FileReport {
                    path: path.clone(),
                    findings: Vec::new(),
                    winner: None,
                    annotated: None,
                });
            }
        }
    }

    let with_findings = reports.iter().filter(|r| !r.findings.is_empty()).count();
    println!(
        "{} of {} file(s) contained barcodes",
        with_findings,
        reports.len()
    );
    Ok(reports)
}

fn annotated_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("image");
    path.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.png"))
}
