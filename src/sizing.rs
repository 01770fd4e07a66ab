//! Pure dimension math for delivered renditions.
//!
//! These functions reproduce what the host's resize pipeline hands back for
//! a given source image and size definition, without touching any pixels.
//! All of them are pure and testable without I/O.
//!
//! Two policies exist:
//!
//! - **Soft fit** (`crop = false`): scale proportionally until the image
//!   fits inside the target box. Never upscales; a source already inside
//!   the box produces no rendition at all.
//! - **Crop** (`crop = true`): center-crop to exactly the target box,
//!   clamped to what the source can supply on each axis. A source smaller
//!   than the target on both axes produces no rendition.
//!
//! A zero target axis means "unconstrained on this axis".

/// Delivered dimensions for a soft-fit resize of `source` into `target`.
///
/// Returns `None` when the host would generate nothing: a degenerate source,
/// a fully unconstrained target, or a source that already fits.
pub fn fit_dimensions(source: (u32, u32), target: (u32, u32)) -> Option<(u32, u32)> {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;
    if src_w == 0 || src_h == 0 {
        return None;
    }

    let width_ratio = (tgt_w > 0).then(|| tgt_w as f64 / src_w as f64);
    let height_ratio = (tgt_h > 0).then(|| tgt_h as f64 / src_h as f64);
    let scale = match (width_ratio, height_ratio) {
        (Some(w), Some(h)) => w.min(h),
        (Some(w), None) => w,
        (None, Some(h)) => h,
        (None, None) => return None,
    };
    if scale >= 1.0 {
        // Already fits; no smaller rendition exists.
        return None;
    }

    let w = (src_w as f64 * scale).round().max(1.0) as u32;
    let h = (src_h as f64 * scale).round().max(1.0) as u32;
    Some((w, h))
}

/// Delivered dimensions for a center-crop of `source` to `target`.
///
/// The crop never extends past the source, so each delivered axis is the
/// smaller of target and source. Returns `None` when the source is smaller
/// than the target on both axes — there is nothing to crop down to.
pub fn crop_dimensions(source: (u32, u32), target: (u32, u32)) -> Option<(u32, u32)> {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;
    if src_w == 0 || src_h == 0 {
        return None;
    }
    if src_w < tgt_w && src_h < tgt_h {
        return None;
    }
    Some((tgt_w.min(src_w), tgt_h.min(src_h)))
}

/// Delivered dimensions for a named size, dispatching on its crop policy.
///
/// A crop box with a zero axis cannot crop meaningfully, so it degrades to
/// a soft fit on the remaining axis.
pub fn delivered_dimensions(
    source: (u32, u32),
    width: u32,
    height: u32,
    crop: bool,
) -> Option<(u32, u32)> {
    if crop && width > 0 && height > 0 {
        crop_dimensions(source, (width, height))
    } else {
        fit_dimensions(source, (width, height))
    }
}

/// Apply the editor display-width clamp to reported dimensions.
///
/// Dimensions wider than `max_width` are scaled down proportionally; others
/// pass through unchanged.
pub fn constrain_width(source: (u32, u32), max_width: u32) -> (u32, u32) {
    let (w, h) = source;
    if max_width == 0 || w <= max_width {
        return (w, h);
    }
    let scaled = (h as f64 * max_width as f64 / w as f64).round().max(1.0) as u32;
    (max_width, scaled)
}
