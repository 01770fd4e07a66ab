//! Admin HTML surfaces.
//!
//! Two surfaces, both rendered with [maud](https://maud.lambda.xyz/) so the
//! markup is compile-time checked and interpolation is escaped by default:
//!
//! - the **settings section** — two checkbox groups, one for content types
//!   (only featured-image-capable types are offered) and one for preview
//!   sizes (registry order, preceded by the original-image sentinel);
//! - the **preview panel** — one block per [`PreviewEntry`], showing the
//!   size name, the configured target and crop policy, the actual delivered
//!   dimensions, and the image itself linked at full scale.
//!
//! [`render_preview_page`] wraps the panel in a complete document so the
//! CLI can emit a self-contained file; embedding hosts use the panel and
//! section fragments directly.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::host::ContentType;
use crate::preview::{Preview, PreviewEntry};
use crate::settings::{CONTENT_TYPES_KEY, ORIGINAL_SIZE, SIZES_KEY, Selections};

/// Styles scoped to the preview panel.
const PANEL_CSS: &str = "\
.crop-preview li + li { margin-top:20px; padding-top:20px; border-top:1px solid #CCC; }
.crop-preview h4, .crop-preview h5 { text-align:center; margin-top:0; }
.crop-preview h5:first-of-type:not(:last-of-type) { margin-bottom:0; }
.crop-preview span { font-weight:300; }
.crop-preview img { max-width:100%; height:auto; }";

/// Render the settings section: content-type and size checkbox groups with
/// the current selections checked.
pub fn render_settings_section(
    types: &[ContentType],
    size_names: &[String],
    selections: &Selections,
) -> Markup {
    html! {
        fieldset.crop-preview-settings {
            h4 { "Content Types" }
            @for content_type in types.iter().filter(|t| t.featured_images) {
                label {
                    input
                        type="checkbox"
                        name=(CONTENT_TYPES_KEY)
                        value=(content_type.name)
                        checked[selections.content_types.contains(&content_type.name)];
                    " " (content_type.label)
                }
            }
            h4 { "Preview Sizes" }
            label {
                input
                    type="checkbox"
                    name=(SIZES_KEY)
                    value=(ORIGINAL_SIZE)
                    checked[selections.sizes.contains(ORIGINAL_SIZE)];
                " Full (original size)"
            }
            @for name in size_names {
                label {
                    input
                        type="checkbox"
                        name=(SIZES_KEY)
                        value=(name)
                        checked[selections.sizes.contains(name)];
                    " " (name)
                }
            }
        }
    }
}

/// One preview block: name, configured target, actual delivered size, image.
fn entry_block(entry: &PreviewEntry) -> Markup {
    html! {
        li {
            h4 { (format!("\u{201C}{}\u{201D}", entry.label)) }
            @if let (Some((width, height)), Some(cropped)) = (entry.target, entry.cropped) {
                h5 {
                    "Desired Size: " span { (width) " x " (height) }
                    " | Cropped: " span { (if cropped { "Yes" } else { "No" }) }
                }
            }
            h5 { "Actual Size: " span { (entry.width) " x " (entry.height) } }
            a target="_blank" href=(entry.url) {
                img src=(entry.url) alt=(entry.label);
            }
        }
    }
}

/// Render the preview panel for one content item.
pub fn render_preview_panel(preview: &Preview) -> Markup {
    match preview {
        Preview::NoFeaturedImage => html! {
            p.crop-preview-empty { "No featured image is set for this item." }
        },
        Preview::Entries(entries) if entries.is_empty() => html! {
            p.crop-preview-empty { "No preview sizes are selected." }
        },
        Preview::Entries(entries) => html! {
            style { (PreEscaped(PANEL_CSS)) }
            ul.crop-preview {
                @for entry in entries {
                    (entry_block(entry))
                }
            }
        },
    }
}

/// Wrap the preview panel in a standalone HTML document.
pub fn render_preview_page(title: &str, preview: &Preview) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped("body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }")) }
            }
            body {
                h1 { "Featured Image Crops" }
                h2 { (title) }
                (render_preview_panel(preview))
            }
        }
    }
}
