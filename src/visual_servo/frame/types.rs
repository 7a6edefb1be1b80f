//! Frame data types

use crate::visual_servo::common::error::{FrameGeometryError, Result};

/// An 8-bit RGB color signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Exact match against an `[r, g, b]` triplet.
    pub fn matches(&self, pixel: &[u8]) -> bool {
        pixel == [self.r, self.g, self.b]
    }
}

/// One camera sample: `height` rows of `row_stride` bytes each.
///
/// Pixels are packed as consecutive `[r, g, b]` triplets. A row may carry
/// padding, so `row_stride` can exceed `width * 3`. Transport metadata
/// (timestamps, encoding tags) is not carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Number of rows
    pub height: usize,
    /// Bytes per row
    pub row_stride: usize,
    /// Row-major pixel bytes; at least `height * row_stride` long
    pub data: Vec<u8>,
}

impl Frame {
    pub const BYTES_PER_PIXEL: usize = 3;

    pub fn new(height: usize, row_stride: usize, data: Vec<u8>) -> Self {
        Self {
            height,
            row_stride,
            data,
        }
    }

    /// Zero-filled frame of the given geometry.
    pub fn blank(height: usize, row_stride: usize) -> Self {
        Self::new(height, row_stride, vec![0; height * row_stride])
    }

    /// Validates the declared geometry and returns the number of bytes a scan covers.
    pub fn scan_len(&self) -> Result<usize> {
        if self.row_stride % Self::BYTES_PER_PIXEL != 0 {
            return Err(FrameGeometryError::UnalignedStride {
                row_stride: self.row_stride,
                bytes_per_pixel: Self::BYTES_PER_PIXEL,
            }
            .into());
        }

        let expected = self.height.checked_mul(self.row_stride).ok_or(
            FrameGeometryError::DimensionOverflow {
                height: self.height,
                row_stride: self.row_stride,
            },
        )?;

        if self.data.len() < expected {
            return Err(FrameGeometryError::TruncatedBuffer {
                expected,
                actual: self.data.len(),
            }
            .into());
        }

        Ok(expected)
    }

    /// Overwrites the pixel at (`row`, `pixel_column`). Out-of-range writes are ignored.
    pub fn set_pixel(&mut self, row: usize, pixel_column: usize, color: Rgb) {
        let offset = row * self.row_stride + pixel_column * Self::BYTES_PER_PIXEL;
        if let Some(pixel) = self.data.get_mut(offset..offset + Self::BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual_servo::common::error::ServoError;

    #[test]
    fn test_scan_len_canonical_frame() {
        let frame = Frame::blank(3, 9);
        assert_eq!(frame.scan_len().unwrap(), 27);
    }

    #[test]
    fn test_scan_len_ignores_trailing_bytes() {
        let frame = Frame::new(2, 6, vec![0; 20]);
        assert_eq!(frame.scan_len().unwrap(), 12);
    }

    #[test]
    fn test_unaligned_stride_is_malformed() {
        let frame = Frame::new(2, 10, vec![0; 20]);
        let err = frame.scan_len().unwrap_err();
        assert!(matches!(
            err,
            ServoError::MalformedFrame(FrameGeometryError::UnalignedStride {
                row_stride: 10,
                bytes_per_pixel: 3
            })
        ));
    }

    #[test]
    fn test_short_buffer_is_malformed() {
        let frame = Frame::new(4, 9, vec![0; 27]);
        let err = frame.scan_len().unwrap_err();
        assert!(matches!(
            err,
            ServoError::MalformedFrame(FrameGeometryError::TruncatedBuffer {
                expected: 36,
                actual: 27
            })
        ));
    }

    #[test]
    fn test_overflowing_geometry_is_malformed() {
        let frame = Frame::new(usize::MAX, 3, Vec::new());
        assert!(matches!(
            frame.scan_len(),
            Err(ServoError::MalformedFrame(
                FrameGeometryError::DimensionOverflow { .. }
            ))
        ));
    }

    #[test]
    fn test_set_pixel_writes_triplet() {
        let mut frame = Frame::blank(2, 6);
        frame.set_pixel(1, 1, Rgb::new(1, 2, 3));
        assert_eq!(&frame.data[9..12], &[1, 2, 3]);
        assert!(frame.data[..9].iter().all(|&b| b == 0));

        frame.set_pixel(5, 0, Rgb::WHITE);
        assert_eq!(frame.data.len(), 12);
    }

    #[test]
    fn test_rgb_matches_exactly() {
        assert!(Rgb::WHITE.matches(&[255, 255, 255]));
        assert!(!Rgb::WHITE.matches(&[255, 255, 254]));
    }
}
