//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader::into_dimensions` (header only) |
//! | Decode (JPEG, PNG, GIF, BMP) | `image::ImageReader`, format sniffed from content |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Resize | `image::DynamicImage::resize_exact` with `CatmullRom` (bicubic) |
//! | Encode | `image::DynamicImage::save_with_format`, format from the output extension |
//!
//! Metadata (EXIF, ICC, animation frames) is not carried over.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{TransformParams, TransformPlan};
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::LazyLock;

/// Resampling kernel for every resize: Catmull-Rom, the bicubic variant.
pub const RESAMPLE_FILTER: FilterType = FilterType::CatmullRom;

/// Extensions accepted as input, with the format each one is written back as.
const INPUT_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("gif", ImageFormat::Gif),
    ("bmp", ImageFormat::Bmp),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    INPUT_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled() && fmt.writing_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the lowercase image extensions the batch driver picks up.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open a file for decoding. The format comes from the file's magic bytes,
/// falling back to the extension, so a PNG named `.jpg` still decodes.
fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>, BackendError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?)
}

fn decode_err(path: &Path, e: image::ImageError) -> BackendError {
    BackendError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    open_reader(path)?
        .decode()
        .map_err(|e| decode_err(path, e))
}

/// Crop (if planned) and resize to exactly the plan's target dimensions.
pub fn apply_plan(image: &DynamicImage, plan: &TransformPlan) -> DynamicImage {
    let target = plan.target;
    match plan.crop_rect() {
        Some(rect) => image
            .crop_imm(rect.left, rect.top, rect.width(), rect.height())
            .resize_exact(target.width, target.height, RESAMPLE_FILTER),
        None => image.resize_exact(target.width, target.height, RESAMPLE_FILTER),
    }
}

/// Save a DynamicImage to the given path, inferring format from extension.
///
/// Only pixel layouts the encoder rejects are converted.
fn save_image(img: DynamicImage, path: &Path) -> Result<(), BackendError> {
    let encode_err = |message: String| BackendError::Encode {
        path: path.to_path_buf(),
        message,
    };

    let format = ImageFormat::from_path(path).map_err(|e| encode_err(e.to_string()))?;
    let img = encodable_layout(img, format);

    img.save_with_format(path, format)
        .map_err(|e| encode_err(e.to_string()))
}

/// Convert `img` into a layout `format`'s encoder accepts.
///
/// JPEG takes `L8` and `Rgb8`, so alpha is dropped and grayscale stays gray.
/// BMP takes 8-bit gray and RGB with or without alpha. GIF frames are RGBA.
fn encodable_layout(img: DynamicImage, format: ImageFormat) -> DynamicImage {
    let color = img.color();
    match format {
        ImageFormat::Jpeg => match color {
            ColorType::L8 | ColorType::Rgb8 => img,
            _ if !color.has_color() => DynamicImage::ImageLuma8(img.to_luma8()),
            _ => DynamicImage::ImageRgb8(img.to_rgb8()),
        },
        ImageFormat::Bmp => match color {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => img,
            _ if color.has_alpha() => DynamicImage::ImageRgba8(img.to_rgba8()),
            _ => DynamicImage::ImageRgb8(img.to_rgb8()),
        },
        ImageFormat::Gif => match color {
            ColorType::Rgba8 => img,
            _ => DynamicImage::ImageRgba8(img.to_rgba8()),
        },
        _ => img,
    }
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_reader(path)?
            .into_dimensions()
            .map_err(|e| decode_err(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn transform(&self, params: &TransformParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = apply_plan(&img, &params.plan);
        save_image(resized, &params.output)
    }
}
