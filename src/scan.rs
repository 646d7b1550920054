//! Input folder enumeration and output naming.
//!
//! Only the top level of the input folder is looked at:
//!
//! ```text
//! photos/                          # Input folder
//! ├── beach.JPG                    # picked up (extension match is case-insensitive)
//! ├── portrait.png                 # picked up
//! ├── notes.txt                    # ignored: not an image extension
//! ├── 2023/                        # ignored: no recursion
//! │   └── older.jpg
//! └── output/                      # ignored: default output folder
//!     └── beach_resize_and_cropped.JPG
//! ```
//!
//! Results are sorted by file name so every run visits files in the same
//! order. Output names do not depend on that order.

use crate::imaging::supported_input_extensions;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Suffix inserted between the file stem and its extension.
pub const OUTPUT_SUFFIX: &str = "_resize_and_cropped";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read input folder: {0}")]
    Walk(#[from] walkdir::Error),
}

/// List the image files directly inside `dir`.
pub fn find_images(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut images = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        // is_file follows symlinks, so linked photos count too
        if path.is_file() && is_image(path) {
            images.push(path.to_path_buf());
        }
    }
    Ok(images)
}

/// Whether `path` has one of the accepted image extensions (any case).
pub fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    supported_input_extensions().contains(&ext.as_str())
}

/// Output file name for `source`: `<stem>_resize_and_cropped.<ext>`.
///
/// The extension keeps its original case. Returns `None` for paths without
/// a file name.
pub fn output_file_name(source: &Path) -> Option<OsString> {
    let mut name = source.file_stem()?.to_os_string();
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    Some(name)
}
