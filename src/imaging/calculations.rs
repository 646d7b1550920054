//! Pure calculation functions for the aspect-fit decision.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! ## Decision
//!
//! ```text
//! change = |source_aspect - target_aspect| / target_aspect
//!
//! change <= max          → no crop, stretch straight to target
//! source wider           → crop left/right to target_aspect * (1 + max)
//! source taller          → crop top/bottom to target_aspect * (1 - max)
//! ```
//!
//! The crop only removes enough to land exactly on the allowed boundary, and
//! it is always centered on the trimmed axis.

use super::params::{Crop, Dimensions, TransformPlan};

/// Decimal digits kept when rounding the crop aspect ratio.
///
/// Stabilizes the float before it feeds integer pixel math so the same
/// inputs give the same rectangle on every platform.
pub const ASPECT_PRECISION: usize = 15;

/// Relative deviation of `aspect` from `target_aspect`: `|a - b| / b`.
///
/// # Examples
/// ```
/// # use resize_crop::imaging::change_factor;
/// assert_eq!(change_factor(2.0, 2.0), 0.0);
/// assert_eq!(change_factor(1.5, 1.0), 0.5);
/// ```
pub fn change_factor(aspect: f64, target_aspect: f64) -> f64 {
    ((aspect - target_aspect) / target_aspect).abs()
}

/// Round `value` to `digits` decimal places.
///
/// Rounds on the exact decimal expansion (the same digits `{:.15}` prints),
/// not on `value * 10^digits`, which picks up its own float error.
pub fn round_to_precision(value: f64, digits: usize) -> f64 {
    format!("{value:.digits$}").parse().unwrap_or(value)
}

/// Plan how to bring `source` to `target` without distorting its aspect
/// ratio by more than `max_change_factor`.
///
/// Deterministic: identical inputs always give an identical plan. The target
/// must have non-zero dimensions; [`BatchConfig::validate`] guarantees that
/// for the CLI.
///
/// Crop lengths are clamped to `[1, source length]` so sources only a few
/// pixels across still keep at least one row or column.
///
/// [`BatchConfig::validate`]: crate::config::BatchConfig::validate
///
/// # Examples
/// ```
/// # use resize_crop::imaging::{plan_transform, Crop, Dimensions};
/// // Portrait phone shot into a 16:9 frame
/// let plan = plan_transform(Dimensions::new(1080, 1920), Dimensions::new(1920, 1080), 0.1);
/// assert!(matches!(plan.crop, Crop::Vertical { top_offset: 622, new_height: 675, .. }));
/// ```
pub fn plan_transform(
    source: Dimensions,
    target: Dimensions,
    max_change_factor: f64,
) -> TransformPlan {
    let source_aspect = source.aspect_ratio();
    let target_aspect = target.aspect_ratio();
    let change = change_factor(source_aspect, target_aspect);

    let crop = if change <= max_change_factor {
        Crop::None
    } else if source_aspect > target_aspect {
        let new_aspect = round_to_precision(
            max_change_factor * target_aspect + target_aspect,
            ASPECT_PRECISION,
        );
        let new_width = clamp_length(source.height as f64 * new_aspect, source.width);
        Crop::Horizontal {
            left_offset: (source.width - new_width) / 2,
            new_width,
            new_aspect,
        }
    } else {
        let new_aspect = round_to_precision(
            -max_change_factor * target_aspect + target_aspect,
            ASPECT_PRECISION,
        );
        let new_height = clamp_length(source.width as f64 / new_aspect, source.height);
        Crop::Vertical {
            top_offset: (source.height - new_height) / 2,
            new_height,
            new_aspect,
        }
    };

    TransformPlan {
        source,
        target,
        source_aspect,
        target_aspect,
        change_factor: change,
        max_change_factor,
        crop,
    }
}

/// Floor a computed crop length and keep it inside the source.
fn clamp_length(length: f64, max: u32) -> u32 {
    // NaN and negatives cast to 0, +inf saturates
    (length.floor() as u32).clamp(1, max)
}
