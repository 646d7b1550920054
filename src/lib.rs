//! # Resize Crop
//!
//! Batch-converts a folder of images to one fixed resolution. Before
//! resizing, each image is center-cropped just enough that the final stretch
//! never changes its aspect ratio by more than a configured factor.
//!
//! # Architecture: Pure Decision, Thin Driver
//!
//! ```text
//! input/  →  scan   →  identify  →  plan (pure)  →  crop + resize  →  output/
//!            names      header       crop rect       Catmull-Rom       <stem>_resize_and_cropped.<ext>
//! ```
//!
//! The crop decision ([`imaging::plan_transform`]) is a pure function of the
//! source size, the target size and the maximum change factor. Everything
//! around it (folder walk, output folder, console output) is plumbing that
//! calls it once per file.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Aspect-fit transform: crop decision, crop + resize, encode |
//! | [`scan`] | Lists the images in the input folder and names their outputs |
//! | [`process`] | Batch driver: output folder handling, per-file loop, progress events |
//! | [`config`] | Batch settings: defaults, TOML file, validation, `W,H` parsing |
//! | [`output`] | CLI output formatting — settings banner, per-image lines, summary |
//!
//! # Design Decisions
//!
//! ## Bounded Crop Instead of Fit or Fill
//!
//! Letterboxing wastes the frame and fill-cropping throws away too much of
//! a portrait shot. Instead the image is allowed to stretch by up to
//! `max_factor_change`; only the excess is cropped, evenly from both sides.
//!
//! ```text
//! change = |source aspect - target aspect| / target aspect
//! ```
//!
//! ## Fixed-Precision Aspect Math
//!
//! The aspect ratio a crop aims for is rounded to 15 decimal digits before
//! it is turned into pixel counts, so the same inputs produce the same crop
//! rectangle everywhere.
//!
//! ## Fail Fast
//!
//! A file that cannot be decoded or written stops the whole run. The tool is
//! one-shot; rerunning after fixing the file is cheap and nothing is
//! silently missing from the output folder.

pub mod config;
pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
