//! First-match color scanner.
//!
//! Walks the frame one pixel at a time in memory order (top-to-bottom,
//! left-to-right) and stops at the first pixel equal to the target color.
//! For a convex target the first hit lies on its topmost row, which is
//! enough to tell which third of the image the target occupies. This is a
//! heuristic: no centroid or majority vote is computed.

use tracing::{debug, instrument};

use crate::visual_servo::common::config::ServoConfig;
use crate::visual_servo::common::error::Result;
use crate::visual_servo::frame::types::{Frame, Rgb};
use crate::visual_servo::scan::types::{DetectionResult, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameScanner {
    target: Rgb,
}

impl FrameScanner {
    pub fn new(target: Rgb) -> Self {
        Self { target }
    }

    pub fn from_config(config: &ServoConfig) -> Self {
        Self::new(config.target_color)
    }

    pub fn target(&self) -> Rgb {
        self.target
    }

    /// Scans `frame` for the target color.
    ///
    /// # Returns
    ///
    /// * `Ok(DetectionResult::Found { zone })` - zone of the first matching pixel
    /// * `Ok(DetectionResult::NotFound)` - no pixel matches
    /// * `Err(ServoError::MalformedFrame)` - the stride is not pixel aligned or
    ///   the buffer is shorter than `height * row_stride`; nothing is read
    #[instrument(level = "debug", skip(self, frame), fields(height = frame.height, row_stride = frame.row_stride))]
    pub fn scan(&self, frame: &Frame) -> Result<DetectionResult> {
        let scan_len = frame.scan_len()?;

        let hit = frame.data[..scan_len]
            .chunks_exact(Frame::BYTES_PER_PIXEL)
            .position(|pixel| self.target.matches(pixel));

        let Some(pixel_index) = hit else {
            debug!("Target not in frame");
            return Ok(DetectionResult::NotFound);
        };

        let offset = pixel_index * Frame::BYTES_PER_PIXEL;
        let column = offset % frame.row_stride;
        let zone = Zone::classify(column, frame.row_stride);

        debug!(
            row = offset / frame.row_stride,
            column,
            ?zone,
            "Target found"
        );
        Ok(DetectionResult::Found { zone })
    }
}
