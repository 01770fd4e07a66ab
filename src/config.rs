//! Library environment configuration.
//!
//! The standalone tool runs against a *library*: a directory of content
//! items plus a `config.toml` describing the host environment the previews
//! are computed for — which content types exist, what the built-in size
//! options are set to, which additional sizes are registered, and whether a
//! theme display-width clamp is in effect.
//!
//! ## Config File
//!
//! ```toml
//! # All settings are optional - defaults shown below
//!
//! display_width = 640       # Theme content-width clamp (omit for none)
//!
//! [[types]]
//! name = "post"
//! label = "Posts"
//! featured_images = true
//!
//! [builtin.thumbnail]
//! width = 150
//! height = 150
//! crop = true
//!
//! [[sizes]]                 # Additional registered sizes, in order
//! name = "hero-banner"
//! width = 1600
//! height = 500
//! crop = true
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::ORIGINAL_SIZE;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Library configuration loaded from `config.toml`.
///
/// All fields have sensible defaults matching a stock host platform. User
/// config files need only specify the values they want to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    /// Theme display-width clamp in pixels. Absent means no clamp.
    pub display_width: Option<u32>,
    /// Content types, in registration order.
    pub types: Vec<TypeConfig>,
    /// Dimension options for the three built-in sizes.
    pub builtin: BuiltinSizes,
    /// Additional registered sizes, in registration order.
    pub sizes: Vec<NamedSize>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            display_width: None,
            types: vec![
                TypeConfig {
                    name: "post".to_string(),
                    label: "Posts".to_string(),
                    featured_images: true,
                },
                TypeConfig {
                    name: "page".to_string(),
                    label: "Pages".to_string(),
                    featured_images: true,
                },
            ],
            builtin: BuiltinSizes::default(),
            sizes: Vec::new(),
        }
    }
}

/// One content type the library recognizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeConfig {
    /// Identifier; also the directory name items of this type live under.
    pub name: String,
    /// Label for the settings checkboxes. Defaults to the name.
    #[serde(default)]
    pub label: String,
    /// Whether items of this type carry a featured image.
    #[serde(default = "default_true")]
    pub featured_images: bool,
}

fn default_true() -> bool {
    true
}

/// Option triples for the three built-in sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuiltinSizes {
    pub thumbnail: SizeOptions,
    pub medium: SizeOptions,
    pub large: SizeOptions,
}

impl Default for BuiltinSizes {
    fn default() -> Self {
        Self {
            thumbnail: SizeOptions {
                width: 150,
                height: 150,
                crop: true,
            },
            medium: SizeOptions {
                width: 300,
                height: 300,
                crop: false,
            },
            large: SizeOptions {
                width: 1024,
                height: 1024,
                crop: false,
            },
        }
    }
}

/// Width/height/crop for one built-in size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizeOptions {
    /// Target width; 0 means unconstrained.
    pub width: u32,
    /// Target height; 0 means unconstrained.
    pub height: u32,
    #[serde(default)]
    pub crop: bool,
}

/// One additionally registered size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedSize {
    pub name: String,
    /// Target width; 0 means unconstrained.
    pub width: u32,
    /// Target height; 0 means unconstrained.
    pub height: u32,
    #[serde(default)]
    pub crop: bool,
}

impl LibraryConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut type_names = BTreeSet::new();
        for content_type in &self.types {
            if content_type.name.is_empty() {
                return Err(ConfigError::Validation(
                    "types.name must not be empty".into(),
                ));
            }
            if !type_names.insert(content_type.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate content type '{}'",
                    content_type.name
                )));
            }
        }

        let mut size_names = BTreeSet::new();
        for size in &self.sizes {
            if size.name.is_empty() {
                return Err(ConfigError::Validation(
                    "sizes.name must not be empty".into(),
                ));
            }
            if size.name == ORIGINAL_SIZE {
                return Err(ConfigError::Validation(format!(
                    "size name '{ORIGINAL_SIZE}' is reserved for the original image"
                )));
            }
            if crate::registry::BUILTIN_SIZES.contains(&size.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "size '{}' is built in; set it under [builtin.{}]",
                    size.name, size.name
                )));
            }
            if !size_names.insert(size.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate size '{}'",
                    size.name
                )));
            }
        }
        Ok(())
    }
}

impl TypeConfig {
    /// Label for the settings checkboxes, falling back to the name when the
    /// config left the label empty.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}

/// Load config from `config.toml` in the given directory.
///
/// A missing file yields the stock defaults; an existing file is parsed
/// sparsely over the defaults, rejects unknown keys, and is validated.
pub fn load_config(root: &Path) -> Result<LibraryConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        LibraryConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Crop Preview Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.

# Theme content-width clamp in pixels. When set, reported image dimensions
# are constrained to this width everywhere except inside the crop preview
# itself (which suspends the clamp to show true generated sizes).
# display_width = 640

# ---------------------------------------------------------------------------
# Content types
# ---------------------------------------------------------------------------
# Items live in a directory named after their type: <library>/<name>/...
# Only types with featured_images = true are offered in the settings UI.
[[types]]
name = "post"
label = "Posts"
featured_images = true

[[types]]
name = "page"
label = "Pages"
featured_images = true

# ---------------------------------------------------------------------------
# Built-in sizes
# ---------------------------------------------------------------------------
# The three built-in sizes always exist; these options set their dimensions.
# A width or height of 0 means unconstrained on that axis.
[builtin.thumbnail]
width = 150
height = 150
crop = true

[builtin.medium]
width = 300
height = 300
crop = false

[builtin.large]
width = 1024
height = 1024
crop = false

# ---------------------------------------------------------------------------
# Additional sizes
# ---------------------------------------------------------------------------
# Registered in the order they appear. The name "full" is reserved.
# [[sizes]]
# name = "hero-banner"
# width = 1600
# height = 500
# crop = true
"##
}
