//! Colorspace thresholding.
//!
//! Converts a BGR image into one of eight colorspaces, maps six 0..=100
//! slider positions onto that colorspace's channel ranges and marks every
//! pixel whose channels all fall inside the resulting bounds.
//!
//! ```no_run
//! use cspace_detection::process;
//! use ndarray::Array3;
//!
//! let image = Array3::<u8>::zeros((480, 640, 3));
//! let output = process(image.view(), "HSV", &[0, 16, 21, 72, 78, 100])?;
//! assert_eq!(output.mask.dim(), (480, 640));
//! # Ok::<(), cspace_detection::ThresholdError>(())
//! ```

pub mod bounds;
pub mod color;
pub mod colorspace;
pub mod conversions;
pub mod convert;
pub mod error;
pub mod pipeline;

pub use bounds::{map_bounds, SliderPolicy, SliderPositions};
pub use color::{in_range, threshold, ColorRange};
pub use colorspace::Colorspace;
pub use convert::convert;
pub use error::ThresholdError;
pub use pipeline::{process, process_with_policy, ThresholdOutput};
