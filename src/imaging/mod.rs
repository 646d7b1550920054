//! Image processing — the aspect-fit transform.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_dimensions`, format sniffed from content |
//! | **Plan** | [`plan_transform`] (pure, no I/O) |
//! | **Crop + resize** | `crop_imm` + `resize_exact` (Catmull-Rom) |
//! | **Encode** | `image` encoders, same format as the source |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for the crop decision (unit testable)
//! - **Parameters**: Data structures describing the decision
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{ASPECT_PRECISION, change_factor, plan_transform, round_to_precision};
pub use operations::{apply_transform, get_dimensions, plan_image};
pub use params::{Crop, CropAxis, CropRect, Dimensions, TransformParams, TransformPlan};
pub use rust_backend::{RustBackend, apply_plan, supported_input_extensions};
