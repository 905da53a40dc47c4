//! Writes one recolored copy of the source icon set per color pack.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FileError;
use crate::layout::Layout;
use crate::pack::{ColorPack, PackConfig};
use crate::recolor::{discover_svgs, recolor_svg};

// ============================================================================
// GenerationReport
// ============================================================================

/// What was written for a single pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOutcome {
    /// Pack identifier from the configuration.
    pub id: String,
    /// Directory the recolored icons were written to.
    pub dir: PathBuf,
    /// File names written, in processing order.
    pub written: Vec<String>,
}

/// Result of a generation run.
///
/// Failures are collected rather than returned early; a bad file never stops
/// the remaining files or packs.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of source SVG files discovered.
    pub source_files: usize,
    /// One entry per pack whose output directory was available.
    pub packs: Vec<PackOutcome>,
    /// Every per-file or per-pack I/O failure.
    pub failures: Vec<FileError>,
}

impl GenerationReport {
    /// Returns true if nothing failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of files written across all packs.
    pub fn files_written(&self) -> usize {
        self.packs.iter().map(|p| p.written.len()).sum()
    }
}

// ============================================================================
// PackGenerator
// ============================================================================

/// Generates recolored icon sets for every non-original pack.
///
/// # Example
///
/// ```no_run
/// use svg_color_packs::{Layout, PackConfig, PackGenerator};
///
/// let layout = Layout::default();
/// let config = PackConfig::load(&layout.config)?;
/// let report = PackGenerator::new(&config, &layout).generate();
/// println!("{} files written", report.files_written());
/// # Ok::<(), svg_color_packs::ConfigError>(())
/// ```
pub struct PackGenerator<'a> {
    config: &'a PackConfig,
    layout: &'a Layout,
}

impl<'a> PackGenerator<'a> {
    pub fn new(config: &'a PackConfig, layout: &'a Layout) -> Self {
        Self { config, layout }
    }

    /// Runs generation for every pack, in configuration order.
    pub fn generate(&self) -> GenerationReport {
        let mut report = GenerationReport::default();

        let svg_files = match discover_svgs(&self.layout.source_dir) {
            Ok(files) => files,
            Err(err) => {
                log::error!("{err}");
                report.failures.push(err);
                Vec::new()
            }
        };
        report.source_files = svg_files.len();
        log::info!("Found {} SVG files to process", svg_files.len());

        for (id, pack) in self.config.iter() {
            log::info!("Processing color pack: {}", pack.name);

            if ColorPack::is_original(id) {
                log::debug!("'{id}' is the source set, nothing to generate");
                continue;
            }

            if let Some(outcome) = self.generate_pack(id, pack, &svg_files, &mut report.failures) {
                report.packs.push(outcome);
            }
        }

        report
    }

    /// Writes one pack. Returns `None` if its directory could not be created.
    fn generate_pack(
        &self,
        id: &str,
        pack: &ColorPack,
        svg_files: &[String],
        failures: &mut Vec<FileError>,
    ) -> Option<PackOutcome> {
        let dir = self.layout.pack_dir(&pack.name);
        if let Err(source) = fs::create_dir_all(&dir) {
            let err = FileError::CreateDir { path: dir, source };
            log::error!("{err}");
            failures.push(err);
            return None;
        }

        let mut written = Vec::with_capacity(svg_files.len());
        for file_name in svg_files {
            let input = self.layout.source_dir.join(file_name);
            let output = dir.join(file_name);

            match recolor_file(&input, &output, &pack.color) {
                Ok(()) => {
                    log::info!("  Generated: {file_name}");
                    written.push(file_name.clone());
                }
                Err(err) => {
                    log::error!("  {err}");
                    failures.push(err);
                }
            }
        }

        Some(PackOutcome {
            id: id.to_string(),
            dir,
            written,
        })
    }
}

/// Reads `input`, recolors it and writes the result to `output`.
pub fn recolor_file(input: &Path, output: &Path, new_color: &str) -> Result<(), FileError> {
    let svg = fs::read_to_string(input).map_err(|source| FileError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    fs::write(output, recolor_svg(&svg, new_color)).map_err(|source| FileError::Write {
        path: output.to_path_buf(),
        source,
    })
}

// ============================================================================
// Tests
// ============================================================================
