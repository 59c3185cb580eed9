use crate::colorspace::Colorspace;
use crate::convert::convert;
use crate::error::ThresholdError;
use ndarray::{Array2, ArrayView3, Axis, Zip};
use serde::{Deserialize, Serialize};

pub const MASK_ON: u8 = 255;
pub const MASK_OFF: u8 = 0;

/// Inclusive per-channel bounds, one element per channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl ColorRange {
    // True when every channel of `pixel` lies in [lower, upper].
    pub fn in_range(&self, pixel: &[u8]) -> bool {
        pixel
            .iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(&value, (&lo, &hi))| {
                let value = value as f64;
                lo <= value && value <= hi
            })
    }

    fn check_channels(&self, expected: usize) -> Result<(), ThresholdError> {
        for actual in [self.lower.len(), self.upper.len()] {
            if actual != expected {
                return Err(ThresholdError::ChannelMismatch { expected, actual });
            }
        }
        Ok(())
    }
}

/// Builds a binary mask from an image that is already in the target colorspace.
pub fn in_range(converted: ArrayView3<u8>, range: &ColorRange) -> Result<Array2<u8>, ThresholdError> {
    let (height, width, channels) = converted.dim();
    range.check_channels(channels)?;

    let mut mask = Array2::<u8>::zeros((height, width));
    Zip::from(&mut mask)
        .and(converted.lanes(Axis(2)))
        .for_each(|dst, pixel| {
            let in_range = match pixel.as_slice() {
                Some(slice) => range.in_range(slice),
                None => range.in_range(&pixel.to_vec()),
            };
            *dst = if in_range { MASK_ON } else { MASK_OFF };
        });

    Ok(mask)
}

/// Converts a BGR image into `cspace` and thresholds it against `range`.
pub fn threshold(
    image: ArrayView3<u8>,
    cspace: Colorspace,
    range: &ColorRange,
) -> Result<Array2<u8>, ThresholdError> {
    // Checked before converting so a bad range costs nothing.
    range.check_channels(cspace.channels())?;
    let converted = convert(image, cspace)?;
    let mask = in_range(converted.view(), range)?;

    tracing::debug!(
        colorspace = %cspace,
        selected = mask.iter().filter(|&&v| v == MASK_ON).count(),
        total = mask.len(),
        "thresholded image"
    );

    Ok(mask)
}
