// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Display window for the live pipeline.

use image::RgbImage;
use minifb::{Key, Window, WindowOptions};

use crate::error::{PostureError, Result};

/// A simple frame viewer using minifb.
///
/// The window closes on Escape or Q; [`update`](Viewer::update) returns
/// `Ok(false)` once that happens so the caller can end its loop.
pub struct Viewer {
    window: Window,
    width: usize,
    height: usize,
    buffer: Vec<u32>,
}

impl Viewer {
    /// Create a new viewer window.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| PostureError::ViewerError(format!("Failed to create window: {e}")))?;

        // Limit update rate to ~60 Hz
        window.set_target_fps(60);

        Ok(Self {
            window,
            width,
            height,
            buffer: Vec::new(),
        })
    }

    /// Display a new frame.
    ///
    /// # Returns
    ///
    /// `Ok(true)` while the window stays open, `Ok(false)` once the user
    /// closed it or pressed Escape/Q.
    ///
    /// # Errors
    ///
    /// Returns an error if the window update fails.
    pub fn update(&mut self, frame: &RgbImage) -> Result<bool> {
        if !self.window.is_open()
            || self.window.is_key_down(Key::Escape)
            || self.window.is_key_down(Key::Q)
        {
            return Ok(false);
        }

        let (frame_width, frame_height) = (frame.width() as usize, frame.height() as usize);

        let num_pixels = frame_width * frame_height;
        if self.buffer.len() != num_pixels {
            self.buffer.resize(num_pixels, 0);
        }

        // Pack pixels as 0x00RRGGBB for minifb
        for (i, pixel) in frame.pixels().enumerate() {
            let r = u32::from(pixel[0]);
            let g = u32::from(pixel[1]);
            let b = u32::from(pixel[2]);
            self.buffer[i] = (r << 16) | (g << 8) | b;
        }

        if self.width != frame_width || self.height != frame_height {
            self.width = frame_width;
            self.height = frame_height;
        }

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| PostureError::ViewerError(format!("Failed to update window: {e}")))?;

        Ok(true)
    }
}
