//! CLI output formatting.
//!
//! Each view has a `format_*` function returning `Vec<String>` (pure, no
//! I/O, unit testable) and a thin `print_*` wrapper that writes the lines
//! to stdout.

use crate::host::ContentType;
use crate::registry::SizeDefinition;
use crate::settings::{ORIGINAL_SIZE, Selections};

fn selected_marker(selected: bool) -> &'static str {
    if selected { "  [selected]" } else { "" }
}

/// The size registry view: the original-image sentinel first, then every
/// resolved size in registry order, with selection markers.
///
/// ```text
/// Preview Sizes
///     full                 original image    [selected]
///     thumbnail            150 x 150 cropped [selected]
///     medium               300 x 300 scaled
/// ```
pub fn format_sizes(registry: &[SizeDefinition], selections: &Selections) -> Vec<String> {
    let mut lines = vec!["Preview Sizes".to_string()];
    lines.push(format!(
        "    {:<20} {:<17}{}",
        ORIGINAL_SIZE,
        "original image",
        selected_marker(selections.sizes.contains(ORIGINAL_SIZE))
    ));
    for size in registry {
        let policy = if size.crop { "cropped" } else { "scaled" };
        lines.push(format!(
            "    {:<20} {:<17}{}",
            size.name,
            format!("{} x {} {}", size.width, size.height, policy),
            selected_marker(selections.sizes.contains(&size.name))
        ));
    }
    lines
}

/// The content-type view, with featured-image capability and selection
/// markers.
pub fn format_content_types(types: &[ContentType], selections: &Selections) -> Vec<String> {
    let mut lines = vec!["Content Types".to_string()];
    for content_type in types {
        let capability = if content_type.featured_images {
            ""
        } else {
            " (no featured images)"
        };
        lines.push(format!(
            "    {:<20} {}{}{}",
            content_type.name,
            content_type.label,
            capability,
            selected_marker(selections.content_types.contains(&content_type.name))
        ));
    }
    lines
}

/// The item inventory: every content item by identifier.
pub fn format_items(items: &[String]) -> Vec<String> {
    let mut lines = vec![format!("Items ({})", items.len())];
    for item in items {
        lines.push(format!("    {item}"));
    }
    lines
}

/// Summary printed after a save, so dropped identifiers are visible.
pub fn format_selection_summary(selections: &Selections) -> Vec<String> {
    let join = |set: &std::collections::BTreeSet<String>| {
        if set.is_empty() {
            "(none)".to_string()
        } else {
            set.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    };
    vec![
        "Saved selections".to_string(),
        format!("    Content types: {}", join(&selections.content_types)),
        format!("    Sizes: {}", join(&selections.sizes)),
    ]
}

pub fn print_sizes(registry: &[SizeDefinition], selections: &Selections) {
    for line in format_sizes(registry, selections) {
        println!("{line}");
    }
}

pub fn print_content_types(types: &[ContentType], selections: &Selections) {
    for line in format_content_types(types, selections) {
        println!("{line}");
    }
}

pub fn print_items(items: &[String]) {
    for line in format_items(items) {
        println!("{line}");
    }
}

pub fn print_selection_summary(selections: &Selections) {
    for line in format_selection_summary(selections) {
        println!("{line}");
    }
}
