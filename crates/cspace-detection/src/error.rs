use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error(
        "{0} is an invalid colorspace, must be one of: BGR, HSV, HLS, Lab, Luv, YCrCb, XYZ, or Grayscale"
    )]
    InvalidColorspace(String),

    #[error("expected 6 slider positions, got {0}")]
    InvalidSliderCount(usize),

    #[error("slider {index} is {value}, outside of 0..=100")]
    SliderOutOfRange { index: usize, value: i32 },

    #[error("bounds have {actual} channels but the converted image has {expected}")]
    ChannelMismatch { expected: usize, actual: usize },

    #[error("expected a non-empty three-channel image, got {height}x{width}x{channels}")]
    InvalidImage {
        height: usize,
        width: usize,
        channels: usize,
    },
}
