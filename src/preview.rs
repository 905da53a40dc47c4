//! Static HTML preview of every color pack.
//!
//! Each pack gets a card with its name, description, a solid color swatch,
//! a few sample icons from its output directory and a link to that directory.

use std::fs;
use std::path::Path;

use crate::error::PreviewWriteError;
use crate::pack::{ColorPack, PackConfig};

pub const PREVIEW_TITLE: &str = "Unraid Animated SVGs - Color Pack Preview";

/// Icons shown on every card, as (file name, alt text).
pub const SAMPLE_ICONS: [(&str, &str); 3] = [
    ("audio_always.svg", "Audio icon"),
    ("cloud_always.svg", "Cloud icon"),
    ("backup_always.svg", "Backup icon"),
];

const STYLE: &str = r#"        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 20px;
            background: #f5f5f5;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
        }
        h1 {
            text-align: center;
            color: #333;
            margin-bottom: 30px;
        }
        .color-packs {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 20px;
        }
        .color-pack {
            background: white;
            border-radius: 10px;
            padding: 20px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .color-pack h2 {
            margin: 0 0 10px 0;
            color: #333;
        }
        .color-pack p {
            margin: 0 0 15px 0;
            color: #666;
            font-size: 14px;
        }
        .color-sample {
            width: 60px;
            height: 40px;
            border-radius: 8px;
            border: 2px solid #ddd;
            margin-bottom: 15px;
        }
        .icon-preview {
            display: flex;
            gap: 10px;
            flex-wrap: wrap;
        }
        .icon-preview img {
            width: 50px;
            height: 50px;
            border-radius: 8px;
            border: 1px solid #ddd;
        }
        .download-link {
            display: inline-block;
            background: #007bff;
            color: white;
            padding: 8px 16px;
            text-decoration: none;
            border-radius: 5px;
            font-size: 14px;
            margin-top: 10px;
        }
        .download-link:hover {
            background: #0056b3;
        }
"#;

// ============================================================================
// Rendering
// ============================================================================

/// Renders the preview document.
///
/// `pack_root_href` is the path from the preview file to the directory that
/// holds one folder per pack (e.g. `Color Packs`). Output depends only on the
/// arguments, so identical input gives byte-identical HTML.
pub fn render_preview(config: &PackConfig, pack_root_href: &str) -> String {
    let mut html = String::with_capacity(4096 + config.len() * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!("    <title>{PREVIEW_TITLE}</title>\n"));
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n");
    html.push_str("    <div class=\"container\">\n");
    html.push_str(&format!("        <h1>{PREVIEW_TITLE}</h1>\n"));
    html.push_str("        <div class=\"color-packs\">\n");

    for (_, pack) in config.iter() {
        render_card(&mut html, pack, pack_root_href);
    }

    html.push_str("        </div>\n    </div>\n</body>\n</html>\n");
    html
}

fn render_card(html: &mut String, pack: &ColorPack, pack_root_href: &str) {
    let dir_href = escape_html(&format!("{pack_root_href}/{}", pack.name));

    html.push_str(&format!(
        r#"
            <div class="color-pack">
                <h2>{name}</h2>
                <p>{description}</p>
                <div class="color-sample" style="background-color: {color}"></div>
                <div class="icon-preview">
"#,
        name = escape_html(&pack.name),
        description = escape_html(&pack.description),
        color = escape_html(&pack.color),
    ));

    for (file, alt) in SAMPLE_ICONS {
        html.push_str(&format!(
            "                    <img src=\"{dir_href}/{file}\" alt=\"{alt}\">\n"
        ));
    }

    html.push_str(&format!(
        r#"                </div>
                <a href="{dir_href}/" class="download-link">Download Pack</a>
            </div>
"#
    ));
}

/// Escapes text for use in HTML content and double-quoted attributes.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Output
// ============================================================================

/// Renders the preview and writes it to `path`, replacing any existing file.
pub fn write_preview(
    config: &PackConfig,
    pack_root_href: &str,
    path: &Path,
) -> Result<(), PreviewWriteError> {
    let html = render_preview(config, pack_root_href);
    fs::write(path, html).map_err(|source| PreviewWriteError {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Created color pack preview: {}", path.display());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config() -> PackConfig {
        PackConfig::new()
            .with_pack("original", ColorPack::new("Original", "Stock colors", "#D52727"))
            .with_pack("ocean", ColorPack::new("Ocean", "Blue theme", "#0077BE"))
    }

    #[test]
    fn lists_every_pack_including_original() {
        let html = render_preview(&config(), "Color Packs");

        assert_eq!(html.matches(r#"<div class="color-pack">"#).count(), 2);
        assert!(html.contains("<h2>Original</h2>"));
        assert!(html.contains("<h2>Ocean</h2>"));
        assert!(html.contains("<p>Blue theme</p>"));
        assert!(html.contains("background-color: #0077BE"));
        assert!(html.contains("background-color: #D52727"));
    }

    #[test]
    fn cards_follow_config_order() {
        let html = render_preview(&config(), "Color Packs");
        let original = html.find("<h2>Original</h2>").unwrap();
        let ocean = html.find("<h2>Ocean</h2>").unwrap();
        assert!(original < ocean);
    }

    #[test]
    fn links_point_into_pack_dir() {
        let html = render_preview(&config(), "Color Packs");

        for (file, alt) in SAMPLE_ICONS {
            let img = format!(r#"<img src="Color Packs/Ocean/{file}" alt="{alt}">"#);
            assert!(html.contains(&img), "missing {img}");
        }
        assert!(html.contains(r#"<a href="Color Packs/Ocean/" class="download-link">"#));
        assert!(html.contains(r#"<a href="Color Packs/Original/" class="download-link">"#));
    }

    #[test]
    fn escapes_text() {
        let config = PackConfig::new().with_pack(
            "fancy",
            ColorPack::new("Rock & Roll", "<b>\"loud\"</b>", "#000000"),
        );
        let html = render_preview(&config, "Color Packs");

        assert!(html.contains("<h2>Rock &amp; Roll</h2>"));
        assert!(html.contains("<p>&lt;b&gt;&quot;loud&quot;&lt;/b&gt;</p>"));
        assert!(html.contains(r#"src="Color Packs/Rock &amp; Roll/audio_always.svg""#));
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(
            render_preview(&config(), "Color Packs"),
            render_preview(&config(), "Color Packs")
        );
    }

    #[test]
    fn empty_config_renders_empty_grid() {
        let html = render_preview(&PackConfig::new(), "Color Packs");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&format!("<h1>{PREVIEW_TITLE}</h1>")));
        assert!(!html.contains(r#"<div class="color-pack">"#));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("color-pack-preview.html");
        fs::write(&path, "stale").unwrap();

        write_preview(&config(), "Color Packs", &path).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert_eq!(html, render_preview(&config(), "Color Packs"));
    }

    #[test]
    fn write_failure_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("preview.html");

        let err = write_preview(&config(), "Color Packs", &path).unwrap_err();
        assert_eq!(err.path, path);
    }
}
