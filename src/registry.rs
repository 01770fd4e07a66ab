//! Named-size registry resolution.
//!
//! The host knows its size names; what each name *means* lives in one of two
//! places. The three built-in platform sizes keep their dimensions in
//! dedicated options the administrator edits directly, while every
//! additionally registered size carries its dimensions as registration
//! metadata. This module folds both sources into one ordered list of
//! [`SizeDefinition`]s, dropping any name that neither source can explain.

use crate::host::SizeRegistry;

/// The built-in platform size names whose dimensions come from dedicated
/// options rather than registration metadata.
pub const BUILTIN_SIZES: [&str; 3] = ["thumbnail", "medium", "large"];

/// A fully resolved registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeDefinition {
    /// Unique size name.
    pub name: String,
    /// Target width; 0 means unconstrained.
    pub width: u32,
    /// Target height; 0 means unconstrained.
    pub height: u32,
    /// Whether the host center-crops to the target box.
    pub crop: bool,
}

/// Resolve every registered size name into a [`SizeDefinition`], preserving
/// host registration order.
///
/// Names found in neither the built-in options nor the registration
/// metadata are silently omitted.
pub fn resolve_size_registry(sizes: &dyn SizeRegistry) -> Vec<SizeDefinition> {
    sizes
        .size_names()
        .into_iter()
        .filter_map(|name| {
            let meta = if BUILTIN_SIZES.contains(&name.as_str()) {
                sizes.builtin_size(&name)
            } else {
                sizes.registered_size(&name)
            }?;
            Some(SizeDefinition {
                name,
                width: meta.width,
                height: meta.height,
                crop: meta.crop,
            })
        })
        .collect()
}
