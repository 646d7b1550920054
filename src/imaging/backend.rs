//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the batch driver
//! needs: identify (read dimensions) and transform (decode, crop, resize,
//! encode, write).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below so driver logic can be
//! checked without decoding anything.

use super::params::TransformParams;
pub use super::params::Dimensions;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
    #[error("Failed to encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Get image dimensions without a full decode where the format allows it.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Apply a transform plan to the source file and write the result.
    fn transform(&self, params: &TransformParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::imaging::calculations::plan_transform;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Mock backend that records operations without executing them.
    ///
    /// Dimensions are handed out in the order they were queued.
    #[derive(Default)]
    pub struct MockBackend {
        pub identify_results: RefCell<VecDeque<Dimensions>>,
        pub operations: RefCell<Vec<RecordedOp>>,
        /// File name whose transform fails, to exercise the abort path.
        pub fail_on: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        Transform {
            source: String,
            output: String,
            source_dims: Dimensions,
            target: Dimensions,
            cropped: bool,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self {
                identify_results: RefCell::new(dims.into()),
                ..Self::default()
            }
        }

        pub fn failing_on(mut self, file_name: &str) -> Self {
            self.fail_on = Some(file_name.to_string());
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.borrow().clone()
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .borrow_mut()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));

            self.identify_results
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| BackendError::Decode {
                    path: path.to_path_buf(),
                    message: "No mock dimensions".to_string(),
                })
        }

        fn transform(&self, params: &TransformParams) -> Result<(), BackendError> {
            let file_name = params
                .source
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if self.fail_on.as_deref() == Some(file_name.as_str()) {
                return Err(BackendError::Encode {
                    path: params.output.clone(),
                    message: "mock failure".to_string(),
                });
            }

            self.operations.borrow_mut().push(RecordedOp::Transform {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                source_dims: params.plan.source,
                target: params.plan.target,
                cropped: params.plan.crop_rect().is_some(),
            });
            Ok(())
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(vec![Dimensions::new(800, 600)]);

        let result = backend.identify(Path::new("/test/image.jpg")).unwrap();
        assert_eq!(result, Dimensions::new(800, 600));

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_identify_without_dimensions_is_decode_error() {
        let backend = MockBackend::new();
        let result = backend.identify(Path::new("/broken.png"));
        assert!(matches!(result, Err(BackendError::Decode { .. })));
    }

    #[test]
    fn mock_records_transform() {
        let backend = MockBackend::new();
        let plan = plan_transform(
            Dimensions::new(2000, 1000),
            Dimensions::new(1920, 1080),
            0.1,
        );

        backend
            .transform(&TransformParams {
                source: "/in/a.jpg".into(),
                output: "/out/a_resize_and_cropped.jpg".into(),
                plan,
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(
            ops,
            vec![RecordedOp::Transform {
                source: "/in/a.jpg".to_string(),
                output: "/out/a_resize_and_cropped.jpg".to_string(),
                source_dims: Dimensions::new(2000, 1000),
                target: Dimensions::new(1920, 1080),
                cropped: true,
            }]
        );
    }

    #[test]
    fn decode_error_names_the_file() {
        let err = BackendError::Decode {
            path: "/in/broken.png".into(),
            message: "bad header".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to decode /in/broken.png: bad header");
    }
}
