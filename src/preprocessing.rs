// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Image preprocessing for landmark inference.
//!
//! Landmark models take a fixed-size square RGB input normalized to [0, 1];
//! frames are resized exactly (no letterboxing, the models are trained on
//! stretched crops) and converted to an NCHW tensor.

use image::DynamicImage;
use image::imageops::FilterType;
use ndarray::Array4;

/// Reciprocal of 255 for normalization.
const INV_255: f32 = 1.0 / 255.0;

/// Preprocess an image for landmark model inference.
///
/// Performs an exact resize to the target size, RGB conversion, normalization
/// to [0, 1], and NCHW tensor layout.
///
/// # Arguments
///
/// * `image` - Input image.
/// * `target_size` - Model input size as (height, width).
///
/// # Returns
///
/// A (1, 3, height, width) `f32` tensor.
#[must_use]
pub fn preprocess_image(image: &DynamicImage, target_size: (usize, usize)) -> Array4<f32> {
    let (height, width) = target_size;

    #[allow(clippy::cast_possible_truncation)]
    let resized = image
        .resize_exact(width as u32, height as u32, FilterType::CatmullRom)
        .to_rgb8();

    let mut tensor = Array4::<f32>::zeros((1, 3, height, width));
    for (x, y, pixel) in resized.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        tensor[[0, 0, y, x]] = f32::from(pixel[0]) * INV_255;
        tensor[[0, 1, y, x]] = f32::from(pixel[1]) * INV_255;
        tensor[[0, 2, y, x]] = f32::from(pixel[2]) * INV_255;
    }

    tensor
}
