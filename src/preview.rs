//! Preview-list construction for a content item's featured image.
//!
//! One entry per selected size, in a fixed order: the original image first
//! (when the `full` sentinel is selected), then every registry entry in
//! host registration order. Sizes that are selected but no longer
//! registered simply never come up in the iteration; sizes the host failed
//! to generate for this particular attachment are omitted individually.
//! None of this is an error — the only distinguished state is an item with
//! no featured image at all.

use crate::host::{MediaLibrary, SizeSlot};
use crate::registry::SizeDefinition;
use crate::settings::{ORIGINAL_SIZE, Selections};

/// Display label for the original-image entry.
pub const ORIGINAL_LABEL: &str = "Original";

/// One rendered preview row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    /// Size name, or [`ORIGINAL_LABEL`].
    pub label: String,
    /// Configured target dimensions. `None` for the original entry.
    pub target: Option<(u32, u32)>,
    /// Configured crop policy. `None` for the original entry.
    pub cropped: Option<bool>,
    /// Actual delivered width.
    pub width: u32,
    /// Actual delivered height.
    pub height: u32,
    pub url: String,
}

/// Result of building a preview for one content item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// The item has no featured image; the renderer shows an empty state.
    NoFeaturedImage,
    /// Entries in display order. May be empty when nothing is selected or
    /// every selected size failed to deliver.
    Entries(Vec<PreviewEntry>),
}

/// Scoped suspension of the host's display-width clamp.
///
/// The clamp exists so editor markup never reports dimensions wider than
/// the theme's content area — exactly wrong for this panel, which must show
/// the true generated dimensions. Acquiring the override saves the current
/// limit and clears it; dropping restores the saved value, on every exit
/// path. When no clamp is configured, nothing is installed or restored.
pub struct DisplayWidthOverride<'a> {
    media: &'a dyn MediaLibrary,
    prior: Option<u32>,
}

impl<'a> DisplayWidthOverride<'a> {
    pub fn suspend(media: &'a dyn MediaLibrary) -> Self {
        let prior = media.display_width_limit();
        if prior.is_some() {
            media.set_display_width_limit(None);
        }
        Self { media, prior }
    }
}

impl Drop for DisplayWidthOverride<'_> {
    fn drop(&mut self) {
        if let Some(prior) = self.prior {
            self.media.set_display_width_limit(Some(prior));
        }
    }
}

/// Build the ordered preview list for `item`.
///
/// `registry` is the resolved size registry (see
/// [`resolve_size_registry`](crate::registry::resolve_size_registry)) in
/// host registration order; the output preserves that order. Re-running
/// with the same registry and selections yields the same entries in the
/// same order.
pub fn build_preview(
    media: &dyn MediaLibrary,
    registry: &[SizeDefinition],
    item: &str,
    selections: &Selections,
) -> Preview {
    let Some(attachment) = media.featured_image(item) else {
        return Preview::NoFeaturedImage;
    };

    // Clamp suspended for the whole resolution pass, restored by Drop.
    let _unclamped = DisplayWidthOverride::suspend(media);

    let mut entries = Vec::new();

    if selections.sizes.contains(ORIGINAL_SIZE) {
        if let Some(source) = media.image_source(&attachment, SizeSlot::Original) {
            entries.push(PreviewEntry {
                label: ORIGINAL_LABEL.to_string(),
                target: None,
                cropped: None,
                width: source.width,
                height: source.height,
                url: source.url,
            });
        }
    }

    for size in registry {
        if !selections.sizes.contains(&size.name) {
            continue;
        }
        let Some(source) = media.image_source(&attachment, SizeSlot::Named(&size.name)) else {
            continue;
        };
        entries.push(PreviewEntry {
            label: size.name.clone(),
            target: Some((size.width, size.height)),
            cropped: Some(size.crop),
            width: source.width,
            height: source.height,
            url: source.url,
        });
    }

    Preview::Entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::resolve_size_registry;
    use crate::test_helpers::{FakeHost, select_sizes};

    #[test]
    fn no_featured_image_is_the_empty_state() {
        let host = FakeHost::new();
        let registry = resolve_size_registry(&host);
        let selections = select_sizes(&["full", "thumbnail"]);
        let preview = build_preview(&host, &registry, "post/missing", &selections);
        assert_eq!(preview, Preview::NoFeaturedImage);
    }

    #[test]
    fn original_then_registry_order() {
        let host = FakeHost::new()
            .with_size("hero", 800, 200, true)
            .with_image("post/one", 1024, 768);
        let registry = resolve_size_registry(&host);
        let selections = select_sizes(&["hero", "thumbnail", "full", "medium"]);

        let Preview::Entries(entries) = build_preview(&host, &registry, "post/one", &selections)
        else {
            panic!("expected entries");
        };
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Original", "thumbnail", "medium", "hero"]);
    }

    #[test]
    fn spec_scenario_thumbnail_and_full() {
        let host = FakeHost::new().with_image("post/one", 1024, 768);
        let registry = resolve_size_registry(&host);
        let selections = select_sizes(&["thumbnail", "full"]);

        let Preview::Entries(entries) = build_preview(&host, &registry, "post/one", &selections)
        else {
            panic!("expected entries");
        };
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].label, "Original");
        assert_eq!(entries[0].target, None);
        assert_eq!(entries[0].cropped, None);
        assert_eq!((entries[0].width, entries[0].height), (1024, 768));

        assert_eq!(entries[1].label, "thumbnail");
        assert_eq!(entries[1].target, Some((150, 150)));
        assert_eq!(entries[1].cropped, Some(true));
        assert_eq!((entries[1].width, entries[1].height), (150, 150));
    }

    #[test]
    fn unselected_sizes_produce_no_entries() {
        let host = FakeHost::new().with_image("post/one", 1024, 768);
        let registry = resolve_size_registry(&host);
        let selections = select_sizes(&["medium"]);

        let Preview::Entries(entries) = build_preview(&host, &registry, "post/one", &selections)
        else {
            panic!("expected entries");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "medium");
    }

    #[test]
    fn stale_selected_size_is_skipped() {
        let host = FakeHost::new().with_image("post/one", 1024, 768);
        let registry = resolve_size_registry(&host);
        let selections = select_sizes(&["banner", "thumbnail"]);

        let Preview::Entries(entries) = build_preview(&host, &registry, "post/one", &selections)
        else {
            panic!("expected entries");
        };
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["thumbnail"]);
    }

    #[test]
    fn failed_delivery_omits_only_that_entry() {
        // 200x180 source: thumbnail (150x150 crop) still delivers, but
        // medium (300x300 fit) would upscale, so the host has nothing.
        let host = FakeHost::new().with_image("post/small", 200, 180);
        let registry = resolve_size_registry(&host);
        let selections = select_sizes(&["thumbnail", "medium", "full"]);

        let Preview::Entries(entries) = build_preview(&host, &registry, "post/small", &selections)
        else {
            panic!("expected entries");
        };
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Original", "thumbnail"]);
    }

    #[test]
    fn order_is_stable_across_runs() {
        let host = FakeHost::new()
            .with_size("hero", 800, 200, true)
            .with_image("post/one", 2048, 1536);
        let registry = resolve_size_registry(&host);
        let selections = select_sizes(&["full", "hero", "thumbnail", "medium", "large"]);

        let first = build_preview(&host, &registry, "post/one", &selections);
        let second = build_preview(&host, &registry, "post/one", &selections);
        assert_eq!(first, second);
    }

    // =========================================================================
    // Display-width override
    // =========================================================================

    #[test]
    fn clamp_is_suspended_during_resolution() {
        let host = FakeHost::new().with_image("post/one", 1024, 768);
        host.limit.set(Some(640));
        let registry = resolve_size_registry(&host);
        let selections = select_sizes(&["full"]);

        let Preview::Entries(entries) = build_preview(&host, &registry, "post/one", &selections)
        else {
            panic!("expected entries");
        };
        // True dimensions, not the clamped 640x480.
        assert_eq!((entries[0].width, entries[0].height), (1024, 768));
    }

    #[test]
    fn clamp_is_restored_exactly_after_build() {
        let host = FakeHost::new().with_image("post/one", 1024, 768);
        host.limit.set(Some(640));
        let registry = resolve_size_registry(&host);
        build_preview(&host, &registry, "post/one", &select_sizes(&["full", "thumbnail"]));
        assert_eq!(host.limit.get(), Some(640));
    }

    #[test]
    fn clamp_is_restored_when_lookups_fail_partway() {
        let host = FakeHost::new()
            .with_image("post/one", 1024, 768)
            .failing_size("medium");
        host.limit.set(Some(640));
        let registry = resolve_size_registry(&host);
        build_preview(
            &host,
            &registry,
            "post/one",
            &select_sizes(&["thumbnail", "medium", "large"]),
        );
        assert_eq!(host.limit.get(), Some(640));
    }

    #[test]
    fn no_clamp_means_none_installed_or_restored() {
        let host = FakeHost::new().with_image("post/one", 1024, 768);
        assert_eq!(host.limit.get(), None);
        let registry = resolve_size_registry(&host);
        build_preview(&host, &registry, "post/one", &select_sizes(&["full"]));
        assert_eq!(host.limit.get(), None);
        // The media library saw no set_display_width_limit calls at all.
        assert_eq!(host.limit_writes.get(), 0);
    }

    #[test]
    fn no_featured_image_leaves_clamp_untouched() {
        let host = FakeHost::new();
        host.limit.set(Some(640));
        let registry = resolve_size_registry(&host);
        let preview = build_preview(&host, &registry, "post/none", &select_sizes(&["full"]));
        assert_eq!(preview, Preview::NoFeaturedImage);
        assert_eq!(host.limit.get(), Some(640));
        assert_eq!(host.limit_writes.get(), 0);
    }
}
