//! High-level image operations.
//!
//! These functions combine calculations with backend execution. They take
//! configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::plan_transform;
use super::params::{Dimensions, TransformParams, TransformPlan};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<Dimensions> {
    backend.identify(path)
}

/// Read the source dimensions and decide how to crop it for `target`.
///
/// A file whose dimensions cannot be read yields a decode error and no plan.
pub fn plan_image(
    backend: &impl ImageBackend,
    source: &Path,
    target: Dimensions,
    max_change_factor: f64,
) -> Result<TransformPlan> {
    let dims = get_dimensions(backend, source)?;
    Ok(plan_transform(dims, target, max_change_factor))
}

/// Execute a plan: crop, resize, and write `output`.
pub fn apply_transform(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    plan: TransformPlan,
) -> Result<()> {
    backend.transform(&TransformParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        plan,
    })
}
