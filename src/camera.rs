// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Webcam capture for the live pipeline.

use image::DynamicImage;
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType},
};

use crate::error::{PostureError, Result};

/// A webcam frame source.
///
/// Frames are decoded to RGB. A failed read is an error; callers log it and
/// terminate their loop rather than retrying.
pub struct CameraSource {
    camera: Camera,
}

impl CameraSource {
    /// Open a camera device by index.
    ///
    /// Tries common resolution/format combinations before falling back to
    /// whatever the device offers.
    ///
    /// # Errors
    ///
    /// Returns an error if no format can be negotiated or the stream fails
    /// to open.
    pub fn open(index: u32) -> Result<Self> {
        let mut camera = None;
        for (w, h) in [(1280, 720), (640, 480)] {
            for fmt in [FrameFormat::RAWRGB, FrameFormat::MJPEG, FrameFormat::YUYV] {
                let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
                    CameraFormat::new_from(w, h, fmt, 30),
                ));
                if let Ok(c) = Camera::new(CameraIndex::Index(index), requested) {
                    camera = Some(c);
                    break;
                }
            }
            if camera.is_some() {
                break;
            }
        }

        let mut camera = match camera {
            Some(c) => c,
            None => {
                let fallback = RequestedFormat::new::<RgbFormat>(RequestedFormatType::None);
                Camera::new(CameraIndex::Index(index), fallback).map_err(|e| {
                    PostureError::CameraError(format!("Failed to open camera {index}: {e}"))
                })?
            }
        };

        camera
            .open_stream()
            .map_err(|e| PostureError::CameraError(format!("Failed to open camera stream: {e}")))?;

        tracing::debug!(format = ?camera.camera_format(), "camera stream opened");

        Ok(Self { camera })
    }

    /// Capture and decode the next frame.
    ///
    /// # Errors
    ///
    /// Returns an error if capture or decode fails.
    pub fn next_frame(&mut self) -> Result<DynamicImage> {
        let frame = self
            .camera
            .frame()
            .map_err(|e| PostureError::CameraError(format!("Failed to capture frame: {e}")))?;

        let decoded = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| PostureError::CameraError(format!("Failed to decode frame: {e}")))?;

        Ok(DynamicImage::ImageRgb8(decoded))
    }

    /// Frame resolution of the negotiated format (width, height).
    #[must_use]
    pub fn resolution(&self) -> (u32, u32) {
        let resolution = self.camera.resolution();
        (resolution.width(), resolution.height())
    }
}
