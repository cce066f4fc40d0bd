// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Frame annotation for the live pipeline.

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::landmarks::Landmark;

/// Landmark dot color (green).
pub const LANDMARK_COLOR: [u8; 3] = [0, 255, 0];

/// Landmark dot color when a smile is flagged (cyan).
pub const SMILE_COLOR: [u8; 3] = [11, 219, 235];

/// Landmark dot radius in pixels.
const LANDMARK_RADIUS: i32 = 1;

/// Draw detected landmarks onto a frame.
///
/// Coordinates are normalized; points outside the frame are skipped.
///
/// # Arguments
///
/// * `image` - The frame to annotate.
/// * `landmarks` - Detection result in normalized coordinates.
/// * `color` - Dot color.
///
/// # Returns
///
/// The annotated frame.
#[must_use]
pub fn annotate_landmarks(
    image: &DynamicImage,
    landmarks: &[Landmark],
    color: [u8; 3],
) -> RgbImage {
    let mut canvas = image.to_rgb8();
    let (width, height) = (canvas.width(), canvas.height());

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    for landmark in landmarks {
        if !(0.0..=1.0).contains(&landmark.x) || !(0.0..=1.0).contains(&landmark.y) {
            continue;
        }
        let x = (landmark.x * width as f32) as i32;
        let y = (landmark.y * height as f32) as i32;
        draw_filled_circle_mut(&mut canvas, (x, y), LANDMARK_RADIUS, Rgb(color));
    }

    canvas
}
