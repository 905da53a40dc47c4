//! Text-level SVG recoloring and source file discovery.
//!
//! Recoloring is a literal substitution of double-quoted `fill` and `stroke`
//! attribute values. It does not parse the SVG: colors written any other way
//! (`style="fill:..."`, short hex, `rgb()`, single quotes, no quotes) are left
//! exactly as they are.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::FileError;

/// Colors in the source icons that get replaced by a pack's color.
pub const SOURCE_COLORS: [&str; 3] = ["#D52727", "#FE8A30", "#F3632D"];

/// Attributes whose values are recolored.
const COLOR_ATTRS: [&str; 2] = ["fill", "stroke"];

/// File extension of source icons (case-sensitive).
pub const SVG_EXTENSION: &str = ".svg";

// ============================================================================
// Substitution
// ============================================================================

/// Replaces every [`SOURCE_COLORS`] entry in `fill`/`stroke` attributes with
/// `new_color`.
///
/// # Example
///
/// ```
/// use svg_color_packs::recolor_svg;
///
/// let svg = r##"<path fill="#D52727" style="fill:#D52727"/>"##;
/// assert_eq!(
///     recolor_svg(svg, "#00FF00"),
///     r##"<path fill="#00FF00" style="fill:#D52727"/>"##,
/// );
/// ```
pub fn recolor_svg(svg: &str, new_color: &str) -> String {
    recolor_svg_with(svg, &SOURCE_COLORS, new_color)
}

/// Same as [`recolor_svg`] with an explicit list of colors to replace.
///
/// Colors are applied in order. Matching is exact and case-sensitive.
pub fn recolor_svg_with(svg: &str, sources: &[&str], new_color: &str) -> String {
    let mut result = svg.to_string();

    for old_color in sources {
        for attr in COLOR_ATTRS {
            result = replace_attr_value(&result, attr, old_color, new_color);
        }
    }

    result
}

/// Replaces `attr="from"` with `attr="to"`.
fn replace_attr_value(svg: &str, attr: &str, from: &str, to: &str) -> String {
    let needle = format!("{attr}=\"{from}\"");
    if !svg.contains(&needle) {
        return svg.to_string();
    }
    svg.replace(&needle, &format!("{attr}=\"{to}\""))
}

// ============================================================================
// Discovery
// ============================================================================

/// Lists the `.svg` files directly inside `dir`, sorted by name.
///
/// A missing directory yields an empty list. Entries that are not regular
/// files, or whose names are not valid UTF-8, are skipped.
pub fn discover_svgs(dir: &Path) -> Result<Vec<String>, FileError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::warn!("source directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(FileError::Read {
                path: dir.to_path_buf(),
                source,
            });
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| FileError::Read {
            path: dir.to_path_buf(),
            source,
        })?;

        let Ok(name) = entry.file_name().into_string() else {
            log::warn!("skipping non UTF-8 file name in {}", dir.display());
            continue;
        };
        if !name.ends_with(SVG_EXTENSION) || !entry.path().is_file() {
            continue;
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}

// ============================================================================
// Tests
// ============================================================================
