//! Captured media artifacts and live preview frames.

use serde::{Deserialize, Serialize};

/// What kind of media a capture step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Audio,
}

/// One encoded media artifact, held in memory until the user confirms it.
///
/// Within this app artifacts are dead-ends once persisted: each capture
/// screen writes exactly one (overwriting on retake) and nothing reads them
/// back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaArtifact {
    pub kind: MediaKind,
    /// Media type of `bytes`, e.g. `image/x-portable-graymap` or `audio/wav`.
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

impl MediaArtifact {
    #[must_use]
    pub fn image(media_type: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            kind: MediaKind::Image,
            media_type,
            bytes,
        }
    }

    #[must_use]
    pub fn audio(media_type: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            kind: MediaKind::Audio,
            media_type,
            bytes,
        }
    }
}

/// A single grayscale preview frame from the camera.
///
/// `luma` holds `width * height` bytes, row-major, 0 = black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub luma: Vec<u8>,
}

impl Frame {
    /// # Panics
    /// Panics if `luma.len() != width * height`; adapters construct frames
    /// from parsed headers and are expected to uphold this.
    #[must_use]
    pub fn new(width: u32, height: u32, luma: Vec<u8>) -> Self {
        assert_eq!(luma.len(), (width * height) as usize, "luma size mismatch");
        Self {
            width,
            height,
            luma,
        }
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        self.luma[(y * self.width + x) as usize]
    }
}

/// Bounding box of a detected face, in frame pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FaceBox {
    /// Center offset from the frame center, normalized to frame dimensions.
    #[must_use]
    pub fn center_offset(&self, frame_width: u32, frame_height: u32) -> (f64, f64) {
        let cx = self.x + self.width / 2.0;
        let cy = self.y + self.height / 2.0;
        let dx = (cx - f64::from(frame_width) / 2.0).abs() / f64::from(frame_width);
        let dy = (cy - f64::from(frame_height) / 2.0).abs() / f64::from(frame_height);
        (dx, dy)
    }

    /// Fraction of the frame area the box covers.
    #[must_use]
    pub fn area_fraction(&self, frame_width: u32, frame_height: u32) -> f64 {
        (self.width * self.height) / (f64::from(frame_width) * f64::from(frame_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_box_has_zero_offset() {
        let b = FaceBox {
            x: 24.0,
            y: 16.0,
            width: 16.0,
            height: 16.0,
        };
        let (dx, dy) = b.center_offset(64, 48);
        assert!(dx < 1e-9);
        assert!(dy < 1e-9);
        let area = b.area_fraction(64, 48);
        assert!((area - (256.0 / 3072.0)).abs() < 1e-9);
    }

    #[test]
    fn test_frame_pixel_indexing() {
        let mut luma = vec![0u8; 6];
        luma[4] = 200; // x=1, y=1 in a 3x2 frame
        let frame = Frame::new(3, 2, luma);
        assert_eq!(frame.pixel(1, 1), 200);
        assert_eq!(frame.pixel(0, 0), 0);
    }
}
