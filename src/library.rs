//! Filesystem-backed host: a content library on disk.
//!
//! [`LocalLibrary`] is one concrete host behind the trait seams in
//! [`host`](crate::host), so the tool works standalone against a directory
//! tree instead of a content platform:
//!
//! ```text
//! library/
//! ├── config.toml        # environment (types, sizes, display clamp)
//! ├── settings.json      # the two persisted selection entries
//! ├── post/
//! │   ├── launch.jpg     # content item; its own featured image
//! │   └── notes.txt      # content item without a featured image
//! └── page/
//!     └── hero.png
//! ```
//!
//! Items are addressed by their `<type>/<file>` relative path. An image
//! file is its own featured image; any other file has none. Named
//! renditions are not materialized on disk — their delivered dimensions are
//! computed from the probed source dimensions through
//! [`sizing`](crate::sizing), and every reported dimension respects the
//! live display-width clamp unless a
//! [`DisplayWidthOverride`](crate::preview::DisplayWidthOverride) has
//! suspended it.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::{self, LibraryConfig};
use crate::host::{
    ContentRegistry, ContentType, ImageSource, MediaLibrary, SettingsStore, SizeMeta,
    SizeRegistry, SizeSlot, StoreError,
};
use crate::registry::BUILTIN_SIZES;
use crate::sizing;

/// File holding the persisted selection entries, beside `config.toml`.
const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

/// A content library rooted at a directory.
pub struct LocalLibrary {
    root: PathBuf,
    config: LibraryConfig,
    /// Live display-width clamp; starts at the configured value and is
    /// temporarily cleared by the preview's scoped override.
    display_width: Cell<Option<u32>>,
}

impl LocalLibrary {
    /// Open the library at `root`, loading and validating its config.
    pub fn open(root: &Path) -> Result<Self, LibraryError> {
        let root = fs::canonicalize(root)?;
        let config = config::load_config(&root)?;
        Ok(Self {
            display_width: Cell::new(config.display_width),
            config,
            root,
        })
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// All content items, as `<type>/<file>` identifiers, grouped by type
    /// in registration order and sorted by name within a type.
    pub fn items(&self) -> Vec<String> {
        let mut items = Vec::new();
        for content_type in &self.config.types {
            let dir = self.root.join(&content_type.name);
            if !dir.is_dir() {
                continue;
            }
            for entry in WalkDir::new(&dir)
                .sort_by_file_name()
                .into_iter()
                .filter_map(Result::ok)
                .filter(|e| e.file_type().is_file())
            {
                if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                    items.push(item_id(relative));
                }
            }
        }
        items
    }

    /// Content type of an item, from the leading path segment. `None` when
    /// the segment is not a registered type.
    pub fn item_content_type(&self, item: &str) -> Option<&str> {
        let prefix = item.split('/').next()?;
        self.config
            .types
            .iter()
            .find(|t| t.name == prefix)
            .map(|t| t.name.as_str())
    }

    /// Absolute path of an item, confined to the library root.
    fn item_path(&self, item: &str) -> Option<PathBuf> {
        if item.split('/').any(|segment| segment == ".." || segment.is_empty()) {
            return None;
        }
        let mut path = self.root.clone();
        path.extend(item.split('/'));
        path.is_file().then_some(path)
    }

    /// Registry metadata for a named size, from whichever source owns it.
    fn size_meta(&self, name: &str) -> Option<SizeMeta> {
        if BUILTIN_SIZES.contains(&name) {
            self.builtin_size(name)
        } else {
            self.registered_size(name)
        }
    }

    fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    /// Current content of `settings.json` as a JSON object map. An absent
    /// or unreadable file is an empty map.
    fn settings_object(&self) -> serde_json::Map<String, Value> {
        fs::read_to_string(self.settings_path())
            .ok()
            .and_then(|content| serde_json::from_str::<Value>(&content).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default()
    }
}

/// Relative path → forward-slash item identifier.
fn item_id(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

impl ContentRegistry for LocalLibrary {
    fn content_types(&self) -> Vec<ContentType> {
        self.config
            .types
            .iter()
            .map(|t| ContentType {
                name: t.name.clone(),
                label: t.display_label().to_string(),
                featured_images: t.featured_images,
            })
            .collect()
    }
}

impl SizeRegistry for LocalLibrary {
    fn size_names(&self) -> Vec<String> {
        BUILTIN_SIZES
            .iter()
            .map(|name| name.to_string())
            .chain(self.config.sizes.iter().map(|s| s.name.clone()))
            .collect()
    }

    fn builtin_size(&self, name: &str) -> Option<SizeMeta> {
        let options = match name {
            "thumbnail" => self.config.builtin.thumbnail,
            "medium" => self.config.builtin.medium,
            "large" => self.config.builtin.large,
            _ => return None,
        };
        Some(SizeMeta {
            width: options.width,
            height: options.height,
            crop: options.crop,
        })
    }

    fn registered_size(&self, name: &str) -> Option<SizeMeta> {
        self.config
            .sizes
            .iter()
            .find(|s| s.name == name)
            .map(|s| SizeMeta {
                width: s.width,
                height: s.height,
                crop: s.crop,
            })
    }
}

impl MediaLibrary for LocalLibrary {
    fn featured_image(&self, item: &str) -> Option<String> {
        let path = self.item_path(item)?;
        // Only a decodable image can be a featured image.
        image::image_dimensions(&path).ok()?;
        Some(item.to_string())
    }

    fn image_source(&self, attachment: &str, slot: SizeSlot<'_>) -> Option<ImageSource> {
        let path = self.item_path(attachment)?;
        let source = image::image_dimensions(&path).ok()?;

        let (width, height) = match slot {
            SizeSlot::Original => source,
            SizeSlot::Named(name) => {
                let meta = self.size_meta(name)?;
                sizing::delivered_dimensions(source, meta.width, meta.height, meta.crop)?
            }
        };

        let (width, height) = match self.display_width.get() {
            Some(limit) => sizing::constrain_width((width, height), limit),
            None => (width, height),
        };

        Some(ImageSource {
            url: format!("file://{}", path.display()),
            width,
            height,
        })
    }

    fn display_width_limit(&self) -> Option<u32> {
        self.display_width.get()
    }

    fn set_display_width_limit(&self, limit: Option<u32>) {
        self.display_width.set(limit);
    }
}

impl SettingsStore for LocalLibrary {
    fn read(&self, key: &str) -> Option<Value> {
        self.settings_object().get(key).cloned()
    }

    fn write(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut object = self.settings_object();
        object.insert(key.to_string(), value);
        let serialized = serde_json::to_string_pretty(&Value::Object(object))?;
        fs::write(self.settings_path(), serialized)?;
        Ok(())
    }
}
