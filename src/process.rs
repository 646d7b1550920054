//! Batch driver: resize and crop every image in a folder.
//!
//! ## Steps
//!
//! 1. Check the input is a directory (otherwise nothing is touched).
//! 2. Optionally delete the existing output folder, then create it.
//! 3. Enumerate images ([`scan::find_images`]).
//! 4. For each image, in file-name order: identify → plan → crop + resize → write.
//!
//! ## Output Structure
//!
//! ```text
//! photos/output/                           # default: <input>/output
//! ├── beach_resize_and_cropped.jpg
//! └── portrait_resize_and_cropped.png
//! ```
//!
//! Output is flat and keeps each source's extension and format.
//!
//! ## Failure Policy
//!
//! Processing is sequential and all-or-nothing per file: the first decode,
//! encode or write failure aborts the run with an error naming the file.
//! Outputs already written stay on disk.
//!
//! ## Progress
//!
//! The driver does not print. It sends [`ProcessEvent`]s over an optional
//! channel; the CLI formats them via [`crate::output`].

use crate::config::BatchConfig;
use crate::imaging::{
    BackendError, ImageBackend, RustBackend, TransformPlan, apply_transform, plan_image,
};
use crate::scan::{self, ScanError};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Name of the output folder created inside the input folder by default.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Not a valid input folder, {}", .0.display())]
    InvalidInputPath(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Scan(#[from] ScanError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Cannot derive an output name for {}", .0.display())]
    OutputName(PathBuf),
}

/// Progress events sent to the CLI while a batch runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    /// The existing output folder was removed.
    OutputCleared { path: PathBuf },
    /// Images were enumerated and the output folder is ready.
    Started { total: usize, output_dir: PathBuf },
    /// One image was planned and is about to be written.
    ImagePlanned {
        /// 1-based position in the batch.
        index: usize,
        total: usize,
        source: PathBuf,
        output: PathBuf,
        plan: TransformPlan,
    },
}

/// What a finished run did.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub processed: usize,
    pub output_dir: PathBuf,
    pub elapsed: Duration,
}

/// Output folder for `input` when none is given: `<input>/output`.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input.join(DEFAULT_OUTPUT_DIR)
}

/// Process a folder with the production backend.
pub fn run(
    input: &Path,
    output: Option<&Path>,
    config: &BatchConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<BatchSummary, ProcessError> {
    run_with_backend(&RustBackend::new(), input, output, config, events)
}

/// Process a folder using a specific backend (allows testing with mock).
pub fn run_with_backend(
    backend: &impl ImageBackend,
    input: &Path,
    output: Option<&Path>,
    config: &BatchConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<BatchSummary, ProcessError> {
    let started = Instant::now();
    // A dropped receiver only means nobody is listening
    let emit = |event: ProcessEvent| {
        if let Some(tx) = &events {
            tx.send(event).ok();
        }
    };

    if !input.is_dir() {
        return Err(ProcessError::InvalidInputPath(input.to_path_buf()));
    }

    let output_dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_dir(input));

    if config.delete_existing_output && output_dir.exists() {
        std::fs::remove_dir_all(&output_dir)?;
        emit(ProcessEvent::OutputCleared {
            path: output_dir.clone(),
        });
    }
    std::fs::create_dir_all(&output_dir)?;

    let images = scan::find_images(input)?;
    let total = images.len();
    emit(ProcessEvent::Started {
        total,
        output_dir: output_dir.clone(),
    });

    for (i, source) in images.iter().enumerate() {
        let file_name = scan::output_file_name(source)
            .ok_or_else(|| ProcessError::OutputName(source.clone()))?;
        let output_path = output_dir.join(file_name);

        let plan = plan_image(
            backend,
            source,
            config.resolution,
            config.max_factor_change,
        )?;

        emit(ProcessEvent::ImagePlanned {
            index: i + 1,
            total,
            source: source.clone(),
            output: output_path.clone(),
            plan,
        });

        apply_transform(backend, source, &output_path, plan)?;
    }

    Ok(BatchSummary {
        processed: total,
        output_dir,
        elapsed: started.elapsed(),
    })
}
