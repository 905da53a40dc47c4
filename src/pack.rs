//! Color pack configuration loaded from `color-packs.json`.
//!
//! A [`PackConfig`] maps pack identifiers to [`ColorPack`] entries, in the
//! order they appear in the file. That order drives both generation and the
//! preview page.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "colorPacks": {
//!     "original": { "name": "Original", "description": "Stock colors", "color": "#D52727" },
//!     "ocean":    { "name": "Ocean",    "description": "Blue theme",   "color": "#0077BE" }
//!   }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use svg_color_packs::PackConfig;
//!
//! let config = PackConfig::from_json(r##"{
//!     "colorPacks": {
//!         "original": { "name": "Original", "description": "", "color": "#D52727" },
//!         "ocean": { "name": "Ocean", "description": "Blue theme", "color": "#0077BE" }
//!     }
//! }"##).unwrap();
//!
//! let targets: Vec<_> = config.targets().map(|(id, _)| id).collect();
//! assert_eq!(targets, ["ocean"]);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Identifier of the pack that describes the untouched source icons.
pub const ORIGINAL_PACK_ID: &str = "original";

// ============================================================================
// ColorPack
// ============================================================================

/// A single named palette with one substitution color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ColorPack {
    /// Display name. Also the output directory name.
    pub name: String,

    /// Short human-readable description shown in the preview.
    pub description: String,

    /// Target hex color, e.g. `#0077BE`. Written verbatim into the SVGs.
    pub color: String,
}

impl ColorPack {
    /// Creates a pack from its name, description and hex color.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            color: color.into(),
        }
    }

    /// Returns true if `id` is the reserved source-set identifier.
    pub fn is_original(id: &str) -> bool {
        id == ORIGINAL_PACK_ID
    }

    /// Parses the pack color. Returns `None` for malformed hex.
    ///
    /// The alpha digits of a `#rrggbbaa` color are ignored.
    pub fn rgb(&self) -> Option<Srgb<u8>> {
        parse_hex_color(&self.color)
    }
}

/// Returns true for `#rgb`, `#rrggbb` or `#rrggbbaa` with ASCII hex digits
/// only. The leading `#` is required since the value is substituted directly
/// into SVG attributes.
fn is_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_hex_color(color: &str) -> Option<Srgb<u8>> {
    if !is_hex_color(color) {
        return None;
    }
    // ASCII only past this point, so byte slicing is safe.
    let rgb = if color.len() == 9 { &color[..7] } else { color };
    Srgb::<u8>::from_str(rgb).ok()
}

fn is_valid_dir_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

// ============================================================================
// PackConfig
// ============================================================================

/// The full, ordered color pack configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PackConfig {
    /// Packs keyed by identifier, in file order.
    pub color_packs: IndexMap<String, ColorPack>,
}

impl PackConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pack. Replaces an existing entry with the same id in place.
    pub fn with_pack(mut self, id: impl Into<String>, pack: ColorPack) -> Self {
        self.color_packs.insert(id.into(), pack);
        self
    }

    /// Reads and validates the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json, path)
    }

    /// Parses and validates a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::parse(json, Path::new("<inline>"))
    }

    fn parse(json: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every entry's color and name.
    ///
    /// Duplicate display names are allowed but logged, since the later pack
    /// overwrites the earlier one's output directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for (id, pack) in &self.color_packs {
            if !is_hex_color(&pack.color) {
                return Err(ConfigError::InvalidColor {
                    pack: id.clone(),
                    color: pack.color.clone(),
                });
            }
            if !is_valid_dir_name(&pack.name) {
                return Err(ConfigError::InvalidName {
                    pack: id.clone(),
                    name: pack.name.clone(),
                });
            }
            if !seen.insert(pack.name.as_str()) {
                log::warn!(
                    "color pack '{}' reuses the name '{}'; its output will overwrite an earlier pack",
                    id,
                    pack.name
                );
            }
        }

        Ok(())
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Returns the JSON schema of the configuration file.
    #[cfg(feature = "jsonschema")]
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(PackConfig)
    }

    /// All packs in file order, including `original`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorPack)> {
        self.color_packs.iter().map(|(id, pack)| (id.as_str(), pack))
    }

    /// Packs that get generated output, i.e. everything except `original`.
    pub fn targets(&self) -> impl Iterator<Item = (&str, &ColorPack)> {
        self.iter().filter(|(id, _)| !ColorPack::is_original(id))
    }

    /// The `original` entry, if present.
    pub fn original(&self) -> Option<&ColorPack> {
        self.get(ORIGINAL_PACK_ID)
    }

    /// Looks up a pack by identifier.
    pub fn get(&self, id: &str) -> Option<&ColorPack> {
        self.color_packs.get(id)
    }

    /// Number of packs, including `original`.
    pub fn len(&self) -> usize {
        self.color_packs.len()
    }

    /// Returns true if no packs are configured.
    pub fn is_empty(&self) -> bool {
        self.color_packs.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r##"{
        "colorPacks": {
            "original": { "name": "Original", "description": "Stock colors", "color": "#D52727" },
            "ocean": { "name": "Ocean", "description": "Blue theme", "color": "#0077BE" },
            "forest": { "name": "Forest", "description": "Green theme", "color": "#228B22" }
        }
    }"##;

    #[test]
    fn parses_in_file_order() {
        let config = PackConfig::from_json(SAMPLE).unwrap();

        let ids: Vec<_> = config.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["original", "ocean", "forest"]);
        assert_eq!(config.get("ocean").unwrap().color, "#0077BE");
    }

    #[test]
    fn targets_skip_original() {
        let config = PackConfig::from_json(SAMPLE).unwrap();

        let ids: Vec<_> = config.targets().map(|(id, _)| id).collect();
        assert_eq!(ids, ["ocean", "forest"]);
        assert_eq!(config.original().unwrap().name, "Original");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let json = r##"{
            "version": 2,
            "colorPacks": {
                "ocean": { "name": "Ocean", "description": "", "color": "#0077BE", "tags": [] }
            }
        }"##;
        let config = PackConfig::from_json(json).unwrap();
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = PackConfig::load(dir.path().join("color-packs.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("color-packs.json");
        fs::write(&path, SAMPLE).unwrap();

        let config = PackConfig::load(&path).unwrap();
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = PackConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_field_is_parse_error() {
        let json = r##"{ "colorPacks": { "ocean": { "name": "Ocean", "color": "#0077BE" } } }"##;
        let err = PackConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_color_packs_key_is_parse_error() {
        let err = PackConfig::from_json("{}").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rejects_malformed_colors() {
        for color in ["0077BE", "#0077B", "#GGGGGG", "blue", "", "#aé", "#+f+f+f", "#0077BEF"] {
            let config =
                PackConfig::new().with_pack("ocean", ColorPack::new("Ocean", "", color));
            let err = config.validate().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidColor { .. }),
                "expected {color:?} to be rejected"
            );
        }
    }

    #[test]
    fn accepts_short_long_and_alpha_hex() {
        let config = PackConfig::new()
            .with_pack("a", ColorPack::new("A", "", "#fff"))
            .with_pack("b", ColorPack::new("B", "", "#0077be"))
            .with_pack("c", ColorPack::new("C", "", "#0077BEFF"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_ascii_color_is_config_error() {
        let json = r##"{"colorPacks":{"ocean":{"name":"Ocean","description":"","color":"#aé"}}}"##;
        let err = PackConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { .. }));
    }

    #[test]
    fn rgb_ignores_alpha_digits() {
        let rgb = ColorPack::new("Ocean", "", "#0077BE80").rgb().unwrap();
        assert_eq!((rgb.red, rgb.green, rgb.blue), (0x00, 0x77, 0xBE));
        assert!(ColorPack::new("Bad", "", "#aé").rgb().is_none());
    }

    #[test]
    fn rejects_path_like_names() {
        for name in ["", ".", "..", "a/b", "a\\b"] {
            let config =
                PackConfig::new().with_pack("x", ColorPack::new(name, "", "#000000"));
            let err = config.validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidName { .. }), "{name:?}");
        }
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let config = PackConfig::new()
            .with_pack("a", ColorPack::new("Same", "", "#000000"))
            .with_pack("b", ColorPack::new("Same", "", "#FFFFFF"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rgb_parses_pack_color() {
        let pack = ColorPack::new("Ocean", "", "#0077BE");
        let rgb = pack.rgb().unwrap();
        assert_eq!((rgb.red, rgb.green, rgb.blue), (0x00, 0x77, 0xBE));
    }

    #[test]
    fn json_uses_camel_case() {
        let config = PackConfig::new().with_pack("ocean", ColorPack::new("Ocean", "", "#0077BE"));
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"colorPacks\""));

        let restored = PackConfig::from_json(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[cfg(feature = "jsonschema")]
    #[test]
    fn schema_names_color_packs() {
        let schema = serde_json::to_string(&PackConfig::json_schema()).unwrap();
        assert!(schema.contains("colorPacks"));
    }
}
