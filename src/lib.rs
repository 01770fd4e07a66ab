//! # Crop Preview
//!
//! Previews the automatically generated crop sizes of a content item's
//! featured image. An administrator picks which content types and which
//! named image sizes to preview; for an item with a featured image, the
//! panel lists one thumbnail per selected size annotated with the
//! configured target dimensions, the crop-or-fit policy, and the dimensions
//! the host actually delivered.
//!
//! # Architecture: Two Responsibilities Behind Host Seams
//!
//! ```text
//! Configuration Manager   sanitize selections → settings store
//!          │                                        │
//!          └── selected_types / selected_sizes ─────┘
//!                                                   │
//! Size Resolver & Renderer   size registry + media ─┴─→ preview entries → HTML
//! ```
//!
//! Everything the system does not own — content types, the named-size
//! registry, attachments, settings persistence — sits behind the four
//! traits in [`host`], passed in explicitly. Two hosts exist: the
//! filesystem-backed [`library::LocalLibrary`] used by the CLI, and the
//! in-memory fake the tests script.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`host`] | Collaborator traits + the value types crossing them |
//! | [`settings`] | Selection sets: sanitize-on-write, lenient read, persist |
//! | [`registry`] | Named-size registry resolution (built-in options vs registration metadata) |
//! | [`sizing`] | Pure dimension math: fit, crop, display-width clamp |
//! | [`preview`] | Preview-list construction + scoped clamp suspension |
//! | [`render`] | Maud HTML: settings section and preview panel |
//! | [`config`] | `config.toml` environment for the standalone library host |
//! | [`library`] | Filesystem-backed host implementation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Sanitize at Write, Tolerate at Read
//!
//! Selections are intersected with the host's valid identifier sets when
//! the administrator saves, and never re-validated on load. A size that
//! disappears from the registry after a save stays in the stored set but
//! produces no preview entry — the stale selection heals itself on the
//! next save. Malformed input (anything not list-shaped) sanitizes to the
//! empty set rather than erroring; the settings path has no failure mode
//! an administrator can reach.
//!
//! ## The Original Image Is Not a Size
//!
//! The `full` sentinel is valid in a size selection but never appears in
//! the registry. It is handled as its own branch everywhere: a dedicated
//! checkbox in the settings section, a dedicated leading entry in the
//! preview, a dedicated [`SizeSlot::Original`](host::SizeSlot) when
//! resolving renditions.
//!
//! ## Scoped Clamp Suspension
//!
//! Hosts clamp editor-reported dimensions to the theme content width,
//! which would make the "actual size" column lie. The preview suspends the
//! clamp through an RAII guard that restores the prior value when dropped,
//! so every exit path — including a failed rendition lookup partway
//! through — leaves the host exactly as it found it.
//!
//! ## Maud Over Template Engines
//!
//! Both admin surfaces are compile-time-checked
//! [Maud](https://maud.lambda.xyz/) templates: malformed markup is a build
//! error, and size names and URLs are escaped by default.

pub mod config;
pub mod host;
pub mod library;
pub mod output;
pub mod preview;
pub mod registry;
pub mod render;
pub mod settings;
pub mod sizing;

#[cfg(test)]
pub(crate) mod test_helpers;
