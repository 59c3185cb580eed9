use crate::bounds::{map_bounds, SliderPolicy, SliderPositions};
use crate::color::threshold;
use crate::colorspace::Colorspace;
use crate::error::ThresholdError;
use ndarray::{Array2, ArrayView3};
use serde::Serialize;

/// Mask plus the bounds that produced it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdOutput {
    #[serde(skip)]
    pub mask: Array2<u8>,
    pub cspace_label: String,
    pub lower_bound: Vec<f64>,
    pub upper_bound: Vec<f64>,
}

/// Thresholds a BGR image in the colorspace named by `cspace_label`.
///
/// Out-of-range sliders are extrapolated; see [`process_with_policy`].
pub fn process(
    image: ArrayView3<u8>,
    cspace_label: &str,
    sliders: &[i32],
) -> Result<ThresholdOutput, ThresholdError> {
    process_with_policy(image, cspace_label, sliders, SliderPolicy::default())
}

pub fn process_with_policy(
    image: ArrayView3<u8>,
    cspace_label: &str,
    sliders: &[i32],
    policy: SliderPolicy,
) -> Result<ThresholdOutput, ThresholdError> {
    // Validate every input before touching pixels.
    let cspace: Colorspace = cspace_label.parse()?;
    let sliders = SliderPositions::try_from(sliders)?.apply_policy(policy)?;

    let range = map_bounds(cspace, &sliders);
    tracing::debug!(
        colorspace = %cspace,
        lower = ?range.lower,
        upper = ?range.upper,
        "mapped slider bounds"
    );

    let mask = threshold(image, cspace, &range)?;

    Ok(ThresholdOutput {
        mask,
        cspace_label: cspace.label().to_string(),
        lower_bound: range.lower,
        upper_bound: range.upper,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn invalid_label_fails_before_slider_checks() {
        let image = Array3::<u8>::zeros((1, 1, 3));
        assert_eq!(
            process(image.view(), "foo", &[0; 3]),
            Err(ThresholdError::InvalidColorspace("foo".to_string()))
        );
    }

    #[test]
    fn wrong_slider_count() {
        let image = Array3::<u8>::zeros((1, 1, 3));
        assert_eq!(
            process(image.view(), "HSV", &[0, 100, 0, 100, 0]),
            Err(ThresholdError::InvalidSliderCount(5))
        );
    }

    #[test]
    fn reject_policy_surfaces_the_offending_slider() {
        let image = Array3::<u8>::zeros((1, 1, 3));
        assert_eq!(
            process_with_policy(
                image.view(),
                "BGR",
                &[0, 100, 0, 101, 0, 100],
                SliderPolicy::Reject
            ),
            Err(ThresholdError::SliderOutOfRange {
                index: 3,
                value: 101
            })
        );
    }

    #[test]
    fn serializes_without_the_mask() {
        let image = Array3::<u8>::zeros((1, 1, 3));
        let output = process(image.view(), "Grayscale", &[0, 50, 0, 0, 0, 0]).unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cspaceLabel": "Grayscale",
                "lowerBound": [0.0],
                "upperBound": [127.5],
            })
        );
    }
}
