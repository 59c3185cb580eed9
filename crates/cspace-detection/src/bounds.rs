use crate::color::ColorRange;
use crate::colorspace::Colorspace;
use crate::error::ThresholdError;
use serde::{Deserialize, Serialize};

pub const SLIDER_COUNT: usize = 6;
pub const SLIDER_MIN: i32 = 0;
pub const SLIDER_MAX: i32 = 100;

/// What to do with slider values outside `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderPolicy {
    /// Map them with the same linear formula, landing outside the channel range.
    #[default]
    Extrapolate,
    /// Pull them back into `0..=100` first.
    Clamp,
    /// Fail with [`ThresholdError::SliderOutOfRange`].
    Reject,
}

/// Six slider positions ordered `(ch1_min, ch1_max, ch2_min, ch2_max, ch3_min, ch3_max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderPositions([i32; SLIDER_COUNT]);

impl SliderPositions {
    pub const fn new(positions: [i32; SLIDER_COUNT]) -> Self {
        Self(positions)
    }

    // Per-channel minimum sliders.
    pub fn lower(&self) -> [i32; 3] {
        [self.0[0], self.0[2], self.0[4]]
    }

    // Per-channel maximum sliders.
    pub fn upper(&self) -> [i32; 3] {
        [self.0[1], self.0[3], self.0[5]]
    }

    fn out_of_range(&self) -> Option<(usize, i32)> {
        self.0
            .iter()
            .copied()
            .enumerate()
            .find(|(_, value)| !(SLIDER_MIN..=SLIDER_MAX).contains(value))
    }

    /// Applies `policy` to values outside `0..=100`.
    pub fn apply_policy(self, policy: SliderPolicy) -> Result<Self, ThresholdError> {
        let Some((index, value)) = self.out_of_range() else {
            return Ok(self);
        };

        match policy {
            SliderPolicy::Extrapolate => {
                tracing::warn!(index, value, "slider outside 0..=100, extrapolating");
                Ok(self)
            }
            SliderPolicy::Clamp => {
                tracing::warn!(index, value, "slider outside 0..=100, clamping");
                Ok(Self(self.0.map(|v| v.clamp(SLIDER_MIN, SLIDER_MAX))))
            }
            SliderPolicy::Reject => Err(ThresholdError::SliderOutOfRange { index, value }),
        }
    }
}

impl TryFrom<&[i32]> for SliderPositions {
    type Error = ThresholdError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        let positions: [i32; SLIDER_COUNT] = values
            .try_into()
            .map_err(|_| ThresholdError::InvalidSliderCount(values.len()))?;
        Ok(Self(positions))
    }
}

// Scales a 0..=100 slider onto [floor, ceiling].
fn scale(raw: i32, floor: f64, ceiling: f64) -> f64 {
    raw as f64 * (ceiling - floor) / 100.0 + floor
}

/// Maps slider positions onto the channel ranges of `cspace`.
///
/// Grayscale keeps only the first channel; the remaining four sliders are
/// accepted and ignored.
pub fn map_bounds(cspace: Colorspace, sliders: &SliderPositions) -> ColorRange {
    let floor = cspace.floor();
    let ceiling = cspace.ceiling();

    let map = |raw: [i32; 3]| -> Vec<f64> {
        raw.iter()
            .zip(floor.iter().zip(ceiling.iter()))
            .take(cspace.channels())
            .map(|(&value, (&lo, &hi))| scale(value, lo, hi))
            .collect()
    };

    ColorRange {
        lower: map(sliders.lower()),
        upper: map(sliders.upper()),
    }
}
