//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the pure [`calculations`](super::calculations) (which
//! decide how an image must be cropped) and the [`backend`](super::backend)
//! (which does the actual pixel work).
//!
//! ## Types
//!
//! - [`Dimensions`] — A `(width, height)` pair, used for sources and targets.
//! - [`Crop`] — Which axis gets trimmed, and by how much.
//! - [`CropRect`] — The `(left, top, right, bottom)` region kept before resizing.
//! - [`TransformPlan`] — The full decision for one image: crop (or not), then resize.
//! - [`TransformParams`] — A plan bound to a source file and an output path.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Width and height of an image, in pixels.
///
/// Serialized as a `[width, height]` pair so config files can write
/// `resolution = [1920, 1080]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height. Never stored, always recomputed.
    pub fn aspect_ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl From<[u32; 2]> for Dimensions {
    fn from([width, height]: [u32; 2]) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl From<Dimensions> for [u32; 2] {
    fn from(d: Dimensions) -> Self {
        [d.width, d.height]
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The axis a crop trims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropAxis {
    /// Left and right edges are trimmed (source too wide).
    Horizontal,
    /// Top and bottom edges are trimmed (source too tall).
    Vertical,
}

/// Crop decision for one image.
///
/// `new_aspect` is the aspect ratio the crop aims for, already rounded to the
/// fixed precision used for pixel math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crop {
    None,
    Horizontal {
        left_offset: u32,
        new_width: u32,
        new_aspect: f64,
    },
    Vertical {
        top_offset: u32,
        new_height: u32,
        new_aspect: f64,
    },
}

impl Crop {
    pub fn axis(&self) -> Option<CropAxis> {
        match self {
            Crop::None => None,
            Crop::Horizontal { .. } => Some(CropAxis::Horizontal),
            Crop::Vertical { .. } => Some(CropAxis::Vertical),
        }
    }
}

/// Region of the source image kept before resizing.
///
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Everything needed to turn a source image into a target-sized one.
///
/// The aspect ratios and change factor are kept alongside the decision so the
/// console output can explain it without recomputing anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformPlan {
    pub source: Dimensions,
    pub target: Dimensions,
    pub source_aspect: f64,
    pub target_aspect: f64,
    pub change_factor: f64,
    pub max_change_factor: f64,
    pub crop: Crop,
}

impl TransformPlan {
    /// The crop rectangle in source pixels, or `None` when no crop is needed.
    pub fn crop_rect(&self) -> Option<CropRect> {
        match self.crop {
            Crop::None => None,
            Crop::Horizontal {
                left_offset,
                new_width,
                ..
            } => Some(CropRect {
                left: left_offset,
                top: 0,
                right: left_offset + new_width,
                bottom: self.source.height,
            }),
            Crop::Vertical {
                top_offset,
                new_height,
                ..
            } => Some(CropRect {
                left: 0,
                top: top_offset,
                right: self.source.width,
                bottom: top_offset + new_height,
            }),
        }
    }

    /// Dimensions of the image handed to the resize step.
    pub fn cropped_dimensions(&self) -> Dimensions {
        self.crop_rect()
            .map(|r| Dimensions::new(r.width(), r.height()))
            .unwrap_or(self.source)
    }
}

/// A transform plan bound to concrete files.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub plan: TransformPlan,
}
