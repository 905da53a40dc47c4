//! Filesystem locations used by a generation run.

use std::path::{Component, Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "color-packs.json";
pub const DEFAULT_PACK_ROOT: &str = "Color Packs";
pub const DEFAULT_SOURCE_DIR: &str = "Color Packs/Original";
pub const DEFAULT_PREVIEW_FILE: &str = "color-pack-preview.html";

/// Where the configuration, source icons and outputs live.
///
/// With the `clap` feature every path can be overridden from the command
/// line; the defaults are relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct Layout {
    /// Color pack configuration file
    #[cfg_attr(feature = "clap", arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE))]
    pub config: PathBuf,

    /// Directory holding the original SVG icons
    #[cfg_attr(feature = "clap", arg(long, value_name = "DIR", default_value = DEFAULT_SOURCE_DIR))]
    pub source_dir: PathBuf,

    /// Directory under which one folder per pack is written
    #[cfg_attr(feature = "clap", arg(long, value_name = "DIR", default_value = DEFAULT_PACK_ROOT))]
    pub output_root: PathBuf,

    /// HTML preview output file
    #[cfg_attr(feature = "clap", arg(long, value_name = "FILE", default_value = DEFAULT_PREVIEW_FILE))]
    pub preview: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self::rooted("")
    }
}

impl Layout {
    /// Default layout placed under `root`.
    pub fn rooted(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            config: root.join(DEFAULT_CONFIG_FILE),
            source_dir: root.join(DEFAULT_SOURCE_DIR),
            output_root: root.join(DEFAULT_PACK_ROOT),
            preview: root.join(DEFAULT_PREVIEW_FILE),
        }
    }

    /// Output directory for a pack with the given display name.
    pub fn pack_dir(&self, pack_name: &str) -> PathBuf {
        self.output_root.join(pack_name)
    }

    /// `output_root` as a `/`-separated href relative to the preview file.
    ///
    /// Paths are compared lexically. When no relative path can be built (one
    /// side absolute and the other not, or the preview directory climbs
    /// above its base with `..`), the output root is used as given.
    pub fn preview_href_base(&self) -> String {
        let preview_dir = lexical_parts(self.preview.parent().unwrap_or(Path::new("")));
        let output_root = lexical_parts(&self.output_root);

        let common = preview_dir
            .iter()
            .zip(&output_root)
            .take_while(|(a, b)| a == b && a.as_str() != "..")
            .count();

        if common == 0 && output_root.first().is_some_and(|p| p.is_empty()) {
            return join_href(&output_root);
        }

        let mut href = Vec::new();
        for part in &preview_dir[common..] {
            if part == ".." || part.is_empty() {
                return join_href(&output_root);
            }
            href.push("..".to_string());
        }
        href.extend(output_root[common..].iter().cloned());
        join_href(&href)
    }
}

/// Splits a path into its components, resolving `.` and `name/..` pairs.
/// A root is kept as a leading empty string and unresolved parents as `..`.
fn lexical_parts(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                parts.push(prefix.as_os_str().to_string_lossy().into_owned())
            }
            Component::RootDir => parts.push(String::new()),
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(last) if !last.is_empty() && last != ".." => {
                    parts.pop();
                }
                _ => parts.push("..".to_string()),
            },
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
        }
    }
    parts
}

fn join_href(parts: &[String]) -> String {
    if parts.is_empty() {
        return ".".to_string();
    }
    if parts.len() == 1 && parts[0].is_empty() {
        return "/".to_string();
    }
    parts.join("/")
}
