//! Shared test utilities: an in-memory host.
//!
//! [`FakeHost`] implements all four collaborator traits over plain maps so
//! unit tests can script registries, attachments, delivery failures, and
//! settings storage without touching the filesystem. Fields are public —
//! tests reach in and rearrange state directly when a builder would be
//! overkill.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::host::{
    ContentRegistry, ContentType, ImageSource, MediaLibrary, SettingsStore, SizeMeta,
    SizeRegistry, SizeSlot, StoreError,
};
use crate::settings::Selections;
use crate::sizing;

/// In-memory host with stock-platform defaults: `post`/`page` types and the
/// three built-in sizes at their default dimensions.
pub struct FakeHost {
    pub types: Vec<ContentType>,
    pub size_names: Vec<String>,
    pub builtins: BTreeMap<String, SizeMeta>,
    pub additional: BTreeMap<String, SizeMeta>,
    /// item identifier → source dimensions; the item is its own attachment.
    pub images: BTreeMap<String, (u32, u32)>,
    /// size names whose per-attachment delivery fails.
    pub failing: BTreeSet<String>,
    pub limit: Cell<Option<u32>>,
    /// number of `set_display_width_limit` calls observed.
    pub limit_writes: Cell<u32>,
    pub entries: RefCell<BTreeMap<String, Value>>,
}

impl FakeHost {
    pub fn new() -> Self {
        let builtins = BTreeMap::from([
            (
                "thumbnail".to_string(),
                SizeMeta {
                    width: 150,
                    height: 150,
                    crop: true,
                },
            ),
            (
                "medium".to_string(),
                SizeMeta {
                    width: 300,
                    height: 300,
                    crop: false,
                },
            ),
            (
                "large".to_string(),
                SizeMeta {
                    width: 1024,
                    height: 1024,
                    crop: false,
                },
            ),
        ]);
        Self {
            types: vec![
                ContentType {
                    name: "post".to_string(),
                    label: "Posts".to_string(),
                    featured_images: true,
                },
                ContentType {
                    name: "page".to_string(),
                    label: "Pages".to_string(),
                    featured_images: true,
                },
            ],
            size_names: vec![
                "thumbnail".to_string(),
                "medium".to_string(),
                "large".to_string(),
            ],
            builtins,
            additional: BTreeMap::new(),
            images: BTreeMap::new(),
            failing: BTreeSet::new(),
            limit: Cell::new(None),
            limit_writes: Cell::new(0),
            entries: RefCell::new(BTreeMap::new()),
        }
    }

    /// Register an additional named size.
    pub fn with_size(mut self, name: &str, width: u32, height: u32, crop: bool) -> Self {
        self.size_names.push(name.to_string());
        self.additional
            .insert(name.to_string(), SizeMeta { width, height, crop });
        self
    }

    /// Add a content item whose featured image has the given dimensions.
    pub fn with_image(mut self, item: &str, width: u32, height: u32) -> Self {
        self.images.insert(item.to_string(), (width, height));
        self
    }

    /// Make per-attachment delivery fail for a size name.
    pub fn failing_size(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Store a raw value directly, bypassing sanitization.
    pub fn store_raw(&self, key: &str, value: Value) {
        self.entries.borrow_mut().insert(key.to_string(), value);
    }
}

/// Selections with the given size names and no content types.
pub fn select_sizes(names: &[&str]) -> Selections {
    Selections {
        content_types: BTreeSet::new(),
        sizes: names.iter().map(|s| s.to_string()).collect(),
    }
}

impl ContentRegistry for FakeHost {
    fn content_types(&self) -> Vec<ContentType> {
        self.types.clone()
    }
}

impl SizeRegistry for FakeHost {
    fn size_names(&self) -> Vec<String> {
        self.size_names.clone()
    }

    fn builtin_size(&self, name: &str) -> Option<SizeMeta> {
        self.builtins.get(name).copied()
    }

    fn registered_size(&self, name: &str) -> Option<SizeMeta> {
        self.additional.get(name).copied()
    }
}

impl MediaLibrary for FakeHost {
    fn featured_image(&self, item: &str) -> Option<String> {
        self.images.contains_key(item).then(|| item.to_string())
    }

    fn image_source(&self, attachment: &str, slot: SizeSlot<'_>) -> Option<ImageSource> {
        let &source = self.images.get(attachment)?;
        let (width, height) = match slot {
            SizeSlot::Original => source,
            SizeSlot::Named(name) => {
                if self.failing.contains(name) {
                    return None;
                }
                let meta = self
                    .builtins
                    .get(name)
                    .or_else(|| self.additional.get(name))?;
                sizing::delivered_dimensions(source, meta.width, meta.height, meta.crop)?
            }
        };
        let (width, height) = match self.limit.get() {
            Some(limit) => sizing::constrain_width((width, height), limit),
            None => (width, height),
        };
        Some(ImageSource {
            url: format!("https://media.example/{attachment}"),
            width,
            height,
        })
    }

    fn display_width_limit(&self) -> Option<u32> {
        self.limit.get()
    }

    fn set_display_width_limit(&self, limit: Option<u32>) {
        self.limit_writes.set(self.limit_writes.get() + 1);
        self.limit.set(limit);
    }
}

impl SettingsStore for FakeHost {
    fn read(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}
