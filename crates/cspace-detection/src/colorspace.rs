use crate::error::ThresholdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DEFAULT_FLOOR: [f64; 3] = [0.0, 0.0, 0.0];
const DEFAULT_CEILING: [f64; 3] = [255.0, 255.0, 255.0];

// Lab stores a and b offset by 128, the encoding never produces 0 there.
const LAB_FLOOR: [f64; 3] = [0.0, 1.0, 1.0];

// Hue is stored as degrees / 2 so it fits a byte.
const HUE_CEILING: [f64; 3] = [180.0, 255.0, 255.0];

/// Target representation for thresholding. Source images are always BGR.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colorspace {
    #[serde(rename = "BGR")]
    Bgr,
    #[serde(rename = "HSV")]
    Hsv,
    #[serde(rename = "HLS")]
    Hls,
    Lab,
    Luv,
    YCrCb,
    #[serde(rename = "XYZ")]
    Xyz,
    Grayscale,
}

impl Colorspace {
    pub const ALL: [Colorspace; 8] = [
        Colorspace::Bgr,
        Colorspace::Hsv,
        Colorspace::Hls,
        Colorspace::Lab,
        Colorspace::Luv,
        Colorspace::YCrCb,
        Colorspace::Xyz,
        Colorspace::Grayscale,
    ];

    // Label accepted on the command line and echoed back in results.
    pub const fn label(&self) -> &'static str {
        match self {
            Colorspace::Bgr => "BGR",
            Colorspace::Hsv => "HSV",
            Colorspace::Hls => "HLS",
            Colorspace::Lab => "Lab",
            Colorspace::Luv => "Luv",
            Colorspace::YCrCb => "YCrCb",
            Colorspace::Xyz => "XYZ",
            Colorspace::Grayscale => "Grayscale",
        }
    }

    // Number of channels an image has after conversion.
    pub const fn channels(&self) -> usize {
        match self {
            Colorspace::Grayscale => 1,
            _ => 3,
        }
    }

    /// Smallest value each channel can take in the 8-bit encoding.
    pub const fn floor(&self) -> [f64; 3] {
        match self {
            Colorspace::Lab => LAB_FLOOR,
            _ => DEFAULT_FLOOR,
        }
    }

    /// Largest value each channel can take in the 8-bit encoding.
    pub const fn ceiling(&self) -> [f64; 3] {
        match self {
            Colorspace::Hsv | Colorspace::Hls => HUE_CEILING,
            _ => DEFAULT_CEILING,
        }
    }
}

impl fmt::Display for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Colorspace {
    type Err = ThresholdError;

    // Labels are matched exactly, "hsv" is not "HSV".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colorspace::ALL
            .into_iter()
            .find(|cspace| cspace.label() == s)
            .ok_or_else(|| ThresholdError::InvalidColorspace(s.to_string()))
    }
}
