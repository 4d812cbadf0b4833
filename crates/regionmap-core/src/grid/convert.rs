//! Conversions between grids and `image` buffers
//!
//! The pixel classifier upstream of the labeler hands over a thresholded
//! grayscale raster, and the overlay consumer downstream wants one back.
//! Both sides use 8-bit luma with `0` as background.

use super::BinaryMask;
use image::{GrayImage, Luma};

/// Luma value written for foreground cells.
pub const FOREGROUND_LUMA: u8 = 255;

impl BinaryMask {
    /// Build a mask from a grayscale image; any non-zero pixel is foreground.
    pub fn from_gray_image(img: &GrayImage) -> Self {
        Self::from_fn(img.width(), img.height(), |x, y| img.get_pixel(x, y).0[0] != 0)
    }

    /// Render the mask as a grayscale image: foreground 255, background 0.
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width(), self.height(), |x, y| {
            if self.get_unchecked(x, y) {
                Luma([FOREGROUND_LUMA])
            } else {
                Luma([0])
            }
        })
    }
}

impl From<&GrayImage> for BinaryMask {
    fn from(img: &GrayImage) -> Self {
        Self::from_gray_image(img)
    }
}

impl From<&BinaryMask> for GrayImage {
    fn from(mask: &BinaryMask) -> Self {
        mask.to_gray_image()
    }
}
