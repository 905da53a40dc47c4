//! svg-color-packs: batch recoloring of SVG icon sets
//!
//! This crate takes one set of source SVG icons and a JSON list of color
//! packs, writes a recolored copy of the icon set for every pack and renders
//! a static HTML page previewing all of them.
//!
//! # Example
//!
//! ```no_run
//! use svg_color_packs::{run_pipeline, Layout};
//!
//! // color-packs.json, Color Packs/Original/*.svg -> Color Packs/<name>/*.svg
//! let summary = run_pipeline(&Layout::default())?;
//! if !summary.is_success() {
//!     eprintln!("{} files failed", summary.generation.failures.len());
//! }
//! # Ok::<(), svg_color_packs::ConfigError>(())
//! ```
//!
//! # Stages
//!
//! The stages can also be driven separately:
//!
//! ```
//! use svg_color_packs::{recolor_svg, render_preview, ColorPack, PackConfig};
//!
//! let config = PackConfig::new()
//!     .with_pack("ocean", ColorPack::new("Ocean", "Blue theme", "#0077BE"));
//!
//! let svg = recolor_svg(r##"<path fill="#FE8A30"/>"##, "#0077BE");
//! assert_eq!(svg, r##"<path fill="#0077BE"/>"##);
//!
//! let html = render_preview(&config, "Color Packs");
//! assert!(html.contains("background-color: #0077BE"));
//! ```

mod error;
mod generator;
mod layout;
mod pack;
mod pipeline;
mod preview;
mod recolor;

pub use error::{ConfigError, FileError, PreviewWriteError};
pub use generator::{recolor_file, GenerationReport, PackGenerator, PackOutcome};
pub use layout::{
    Layout, DEFAULT_CONFIG_FILE, DEFAULT_PACK_ROOT, DEFAULT_PREVIEW_FILE, DEFAULT_SOURCE_DIR,
};
pub use pack::{ColorPack, PackConfig, ORIGINAL_PACK_ID};
pub use pipeline::{run_pipeline, RunSummary};
pub use preview::{render_preview, write_preview, PREVIEW_TITLE, SAMPLE_ICONS};
pub use recolor::{discover_svgs, recolor_svg, recolor_svg_with, SOURCE_COLORS, SVG_EXTENSION};
