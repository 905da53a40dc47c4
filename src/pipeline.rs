//! The complete run: load configuration, generate packs, write the preview.

use crate::error::{ConfigError, PreviewWriteError};
use crate::generator::{GenerationReport, PackGenerator};
use crate::layout::Layout;
use crate::pack::PackConfig;
use crate::preview::write_preview;

/// Outcome of [`run_pipeline`] once the configuration has loaded.
#[derive(Debug)]
pub struct RunSummary {
    pub generation: GenerationReport,
    pub preview: Result<(), PreviewWriteError>,
}

impl RunSummary {
    /// Returns true if every file and the preview were written.
    pub fn is_success(&self) -> bool {
        self.generation.is_clean() && self.preview.is_ok()
    }
}

/// Runs all stages against `layout`.
///
/// Only a configuration failure is returned as an error, and in that case
/// nothing is written. File and preview failures are reported in the
/// summary after all remaining work has been attempted.
pub fn run_pipeline(layout: &Layout) -> Result<RunSummary, ConfigError> {
    let config = PackConfig::load(&layout.config)?;

    let generation = PackGenerator::new(&config, layout).generate();

    let preview = write_preview(&config, &layout.preview_href_base(), &layout.preview);
    if let Err(err) = &preview {
        log::error!("{err}");
    }

    Ok(RunSummary {
        generation,
        preview,
    })
}
