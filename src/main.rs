use std::process::ExitCode;

use anyhow::Context;
use svg_color_packs::{run_pipeline, Layout};

#[cfg(feature = "clap")]
#[derive(clap::Parser)]
#[command(version, about = "Generates recolored SVG icon packs and an HTML preview")]
struct Cli {
    #[command(flatten)]
    layout: Layout,
}

#[cfg(feature = "clap")]
fn layout() -> Layout {
    use clap::Parser;
    Cli::parse().layout
}

#[cfg(not(feature = "clap"))]
fn layout() -> Layout {
    Layout::default()
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let layout = layout();
    let rule = "=".repeat(60);

    log::info!("Unraid Animated SVGs - Color Pack Generator");
    log::info!("{rule}");

    let summary = run_pipeline(&layout).with_context(|| {
        format!("no color packs generated from {}", layout.config.display())
    })?;

    log::info!("{rule}");
    log::info!(
        "Color pack generation complete: {} files in {} packs",
        summary.generation.files_written(),
        summary.generation.packs.len()
    );
    log::info!("Check '{}' for all variants.", layout.output_root.display());
    if summary.preview.is_ok() {
        log::info!("Open '{}' to see a preview of all color packs.", layout.preview.display());
    }

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        log::error!(
            "{} file error(s){}",
            summary.generation.failures.len(),
            if summary.preview.is_err() { ", preview not written" } else { "" }
        );
        Ok(ExitCode::FAILURE)
    }
}
