use crate::colorspace::Colorspace;
use crate::conversions::{
    bgr_to_gray, bgr_to_hls, bgr_to_hsv, bgr_to_lab, bgr_to_luv, bgr_to_xyz, bgr_to_ycrcb,
};
use crate::error::ThresholdError;
use ndarray::{Array3, ArrayView3, Axis, Zip};

// Rejects anything that is not a non-empty (height, width, 3) array.
pub(crate) fn check_color_image(image: &ArrayView3<u8>) -> Result<(), ThresholdError> {
    let (height, width, channels) = image.dim();
    if height == 0 || width == 0 || channels != 3 {
        return Err(ThresholdError::InvalidImage {
            height,
            width,
            channels,
        });
    }
    Ok(())
}

/// Converts a BGR image into `target`.
///
/// The result has shape `(height, width, target.channels())`. Converting to
/// [`Colorspace::Bgr`] returns an owned copy of the input.
pub fn convert(image: ArrayView3<u8>, target: Colorspace) -> Result<Array3<u8>, ThresholdError> {
    check_color_image(&image)?;

    if target == Colorspace::Bgr {
        return Ok(image.to_owned());
    }

    let (height, width, _) = image.dim();
    let mut converted = Array3::<u8>::zeros((height, width, target.channels()));

    Zip::from(image.lanes(Axis(2)))
        .and(converted.lanes_mut(Axis(2)))
        .for_each(|src, mut dst| {
            let (b, g, r) = (src[0], src[1], src[2]);
            let pixel = match target {
                Colorspace::Grayscale => {
                    dst[0] = bgr_to_gray(b, g, r);
                    return;
                }
                Colorspace::Bgr => (b, g, r),
                Colorspace::Hsv => bgr_to_hsv(b, g, r),
                Colorspace::Hls => bgr_to_hls(b, g, r),
                Colorspace::Lab => bgr_to_lab(b, g, r),
                Colorspace::Luv => bgr_to_luv(b, g, r),
                Colorspace::YCrCb => bgr_to_ycrcb(b, g, r),
                Colorspace::Xyz => bgr_to_xyz(b, g, r),
            };
            dst[0] = pixel.0;
            dst[1] = pixel.1;
            dst[2] = pixel.2;
        });

    tracing::debug!(
        colorspace = %target,
        height,
        width,
        "converted image"
    );

    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3};

    fn sample() -> Array3<u8> {
        // 2x2 BGR: red, green / blue, white
        array![
            [[0, 0, 255], [0, 255, 0]],
            [[255, 0, 0], [255, 255, 255]],
        ]
    }

    #[test]
    fn bgr_is_identity() {
        let image = sample();
        let converted = convert(image.view(), Colorspace::Bgr).unwrap();
        assert_eq!(converted, image);
    }

    #[test]
    fn output_shape_follows_channel_count() {
        let image = sample();
        for cspace in Colorspace::ALL {
            let converted = convert(image.view(), cspace).unwrap();
            assert_eq!(converted.dim(), (2, 2, cspace.channels()), "{cspace}");
        }
    }

    #[test]
    fn hsv_per_pixel() {
        let converted = convert(sample().view(), Colorspace::Hsv).unwrap();
        assert_eq!(converted.slice(ndarray::s![0, 0, ..]).to_vec(), vec![0, 255, 255]);
        assert_eq!(converted.slice(ndarray::s![0, 1, ..]).to_vec(), vec![60, 255, 255]);
        assert_eq!(converted.slice(ndarray::s![1, 0, ..]).to_vec(), vec![120, 255, 255]);
        assert_eq!(converted.slice(ndarray::s![1, 1, ..]).to_vec(), vec![0, 0, 255]);
    }

    #[test]
    fn grayscale_per_pixel() {
        let converted = convert(sample().view(), Colorspace::Grayscale).unwrap();
        assert_eq!(converted, array![[[76], [150]], [[29], [255]]]);
    }

    #[test]
    fn works_on_non_standard_layout() {
        let image = sample();
        let flipped = image.slice(ndarray::s![..;-1, .., ..]);
        let converted = convert(flipped, Colorspace::Grayscale).unwrap();
        assert_eq!(converted, array![[[29], [255]], [[76], [150]]]);
    }

    #[test]
    fn rejects_non_color_images() {
        let gray = Array3::<u8>::zeros((4, 4, 1));
        assert_eq!(
            convert(gray.view(), Colorspace::Hsv),
            Err(ThresholdError::InvalidImage {
                height: 4,
                width: 4,
                channels: 1,
            })
        );

        let empty = Array3::<u8>::zeros((0, 4, 3));
        assert!(convert(empty.view(), Colorspace::Bgr).is_err());
    }
}
