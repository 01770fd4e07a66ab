//! Host collaborator interfaces.
//!
//! The preview system never owns content, media, or settings — it reads a
//! host platform's registries and writes two settings keys. Those
//! collaborators are modeled as four small traits so that every consumer
//! receives them explicitly (`&dyn ...`), nothing is ambient, and tests can
//! substitute an in-memory host.
//!
//! | Trait | Host responsibility |
//! |---|---|
//! | [`ContentRegistry`] | enumerate content types + featured-image capability |
//! | [`SizeRegistry`] | enumerate named sizes + per-name dimension metadata |
//! | [`MediaLibrary`] | featured-image lookup, delivered renditions, display clamp |
//! | [`SettingsStore`] | the two persisted string-set entries |
//!
//! Settings values cross this boundary as raw [`serde_json::Value`]s: the
//! store holds whatever the host persisted, and the sanitize layer in
//! [`settings`](crate::settings) is the only place that decides whether a
//! stored or submitted value is list-shaped.

use serde_json::Value;
use thiserror::Error;

/// Errors a settings store may raise on write. Reads never fail — an
/// unreadable entry is indistinguishable from an absent one.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A content type registered with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    /// Identifier used in selections and settings keys.
    pub name: String,
    /// Human-readable label for the settings checkboxes.
    pub label: String,
    /// Whether items of this type can carry a featured image. Only capable
    /// types are offered in the settings UI; see
    /// [`sanitize_content_types`](crate::settings::sanitize_content_types)
    /// for how this interacts with sanitization.
    pub featured_images: bool,
}

/// Dimension metadata for one named size, as registered with the host.
///
/// A zero width or height means "unconstrained on this axis".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMeta {
    pub width: u32,
    pub height: u32,
    /// `true`: center-crop to exactly the target box. `false`: scale to fit
    /// within it.
    pub crop: bool,
}

/// A delivered image rendition: where it lives and how large it actually is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Which rendition of an attachment to resolve.
///
/// The original, unresized image is a distinct branch — it is never part of
/// the named-size registry and must not be merged into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSlot<'a> {
    /// The image at its original scale.
    Original,
    /// A host-registered named size.
    Named(&'a str),
}

/// Read-only view of the host's content types.
pub trait ContentRegistry {
    /// All registered content types, in registration order.
    fn content_types(&self) -> Vec<ContentType>;
}

/// Read-only view of the host's named image sizes.
///
/// Resolution of a name into a [`SizeMeta`] has two sources: the built-in
/// platform sizes carry dedicated options, every other registered size
/// carries generic registration metadata. [`resolve_size_registry`]
/// (crate::registry::resolve_size_registry) dispatches between the two.
pub trait SizeRegistry {
    /// Registered size names, in registration order. Never contains the
    /// original-image sentinel.
    fn size_names(&self) -> Vec<String>;

    /// Dimension options for a built-in platform size name.
    fn builtin_size(&self, name: &str) -> Option<SizeMeta>;

    /// Generic registration metadata for an additionally registered size.
    fn registered_size(&self, name: &str) -> Option<SizeMeta>;
}

/// Read-only view of the host's media attachments, plus the one piece of
/// host state this system temporarily overrides: the editor display-width
/// clamp.
pub trait MediaLibrary {
    /// Attachment identifier of the item's featured image, if one is set.
    fn featured_image(&self, item: &str) -> Option<String>;

    /// Resolve the delivered rendition of an attachment at the given slot.
    ///
    /// `None` means the host has no such rendition for this attachment
    /// (for example the source was smaller than the target, so nothing was
    /// generated). Callers omit the entry rather than failing.
    fn image_source(&self, attachment: &str, slot: SizeSlot<'_>) -> Option<ImageSource>;

    /// Current display-width clamp, if one is configured. When set, the
    /// host constrains reported dimensions to this width.
    fn display_width_limit(&self) -> Option<u32>;

    /// Install or clear the display-width clamp. Used only by
    /// [`DisplayWidthOverride`](crate::preview::DisplayWidthOverride),
    /// which restores the prior value when dropped.
    fn set_display_width_limit(&self, limit: Option<u32>);
}

/// The host's key-value settings storage.
///
/// Each key is atomic on its own; there is no transaction across keys.
pub trait SettingsStore {
    /// Stored value for `key`, if any.
    fn read(&self, key: &str) -> Option<Value>;

    /// Persist `value` under `key`.
    fn write(&self, key: &str, value: Value) -> Result<(), StoreError>;
}
