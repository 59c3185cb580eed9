use image::{DynamicImage, GrayImage, ImageBuffer};
use ndarray::{Array3, ArrayView2};
use std::path::Path;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
// Represents an image with raw pixel data and dimensions.
pub struct Frame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

#[derive(Clone, Copy, Debug, PartialEq)]
// Describes how pixels are laid out and how many bytes each uses.
pub enum PixelFormat {
    RGB8,  // 3 bytes per pixel (R, G, B)
    BGR8,  // 3 bytes per pixel (B, G, R)
    GRAY8, // 1 byte per pixel (grayscale)
}

impl PixelFormat {
    // Returns how many bytes each pixel uses for this format.
    pub const fn bytes_per_pixel(&self) -> u32 {
        match self {
            PixelFormat::GRAY8 => 1,
            PixelFormat::RGB8 | PixelFormat::BGR8 => 3,
        }
    }
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("buffer holds {actual} bytes, dimensions need {expected}")]
    InvalidDimensions { expected: usize, actual: usize },

    #[error("image has a zero dimension")]
    ZeroDimensions,

    #[error("image is too large: {height}x{width}")]
    TooLarge { height: usize, width: usize },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub struct FrameConfig {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

impl Frame {
    // Validates buffer size against dimensions and constructs a frame.
    pub fn new(config: FrameConfig) -> Result<Self, FrameError> {
        if config.width == 0 || config.height == 0 {
            return Err(FrameError::ZeroDimensions);
        }

        let expected = config.width as usize
            * config.height as usize
            * config.format.bytes_per_pixel() as usize;
        if config.data.len() != expected {
            return Err(FrameError::InvalidDimensions {
                expected,
                actual: config.data.len(),
            });
        }

        Ok(Self {
            data: config.data,
            width: config.width,
            height: config.height,
            format: config.format,
        })
    }

    // Decodes into 8-bit RGB regardless of the source color type.
    pub fn from_dynamic_image(img: DynamicImage) -> Result<Self, FrameError> {
        let rgb = img.into_rgb8();
        let (width, height) = rgb.dimensions();
        Frame::new(FrameConfig {
            data: rgb.into_raw(),
            width,
            height,
            format: PixelFormat::RGB8,
        })
    }

    // Wraps a single-channel mask.
    pub fn from_mask(mask: ArrayView2<u8>) -> Result<Self, FrameError> {
        let (height, width) = mask.dim();
        let too_large = || FrameError::TooLarge { height, width };
        Frame::new(FrameConfig {
            data: mask.iter().copied().collect(),
            width: u32::try_from(width).map_err(|_| too_large())?,
            height: u32::try_from(height).map_err(|_| too_large())?,
            format: PixelFormat::GRAY8,
        })
    }

    // Converts the frame into 8-bit BGR.
    pub fn to_bgr8(&self) -> Frame {
        let data = match self.format {
            PixelFormat::BGR8 => return self.clone(),
            PixelFormat::RGB8 => self
                .data
                .chunks_exact(3)
                .flat_map(|p| [p[2], p[1], p[0]])
                .collect(),
            PixelFormat::GRAY8 => self.data.iter().flat_map(|&g| [g, g, g]).collect(),
        };

        Frame {
            data,
            width: self.width,
            height: self.height,
            format: PixelFormat::BGR8,
        }
    }

    // Moves the pixel data into a (height, width, channels) array.
    pub fn into_array(self) -> Result<Array3<u8>, FrameError> {
        let shape = (
            self.height as usize,
            self.width as usize,
            self.format.bytes_per_pixel() as usize,
        );
        Ok(Array3::from_shape_vec(shape, self.data)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), FrameError> {
        self.to_dynamic_image()?.save(path)?;
        Ok(())
    }
}

pub trait ToDynamicImage {
    fn to_dynamic_image(&self) -> Result<DynamicImage, FrameError>;
}

impl ToDynamicImage for Frame {
    fn to_dynamic_image(&self) -> Result<DynamicImage, FrameError> {
        let invalid = || FrameError::InvalidDimensions {
            expected: self.width as usize
                * self.height as usize
                * self.format.bytes_per_pixel() as usize,
            actual: self.data.len(),
        };

        match self.format {
            PixelFormat::GRAY8 => {
                let img: GrayImage = ImageBuffer::from_raw(self.width, self.height, self.data.clone())
                    .ok_or_else(invalid)?;
                Ok(DynamicImage::ImageLuma8(img))
            }
            PixelFormat::RGB8 => {
                let img = ImageBuffer::from_raw(self.width, self.height, self.data.clone())
                    .ok_or_else(invalid)?;
                Ok(DynamicImage::ImageRgb8(img))
            }
            PixelFormat::BGR8 => {
                let rgb: Vec<u8> = self
                    .data
                    .chunks_exact(3)
                    .flat_map(|p| [p[2], p[1], p[0]])
                    .collect();
                let img = ImageBuffer::from_raw(self.width, self.height, rgb).ok_or_else(invalid)?;
                Ok(DynamicImage::ImageRgb8(img))
            }
        }
    }
}
