//! Luma-heuristic face detector.
//!
//! Best-effort stand-in for the third-party detection model: the subject in
//! a well-lit intake booth is the dominant bright region of the preview
//! frame, so its bounding box approximates the face box well enough to drive
//! the auto-capture countdown. A model-backed detector can replace this
//! behind the same port; detection quality only ever affects the automatic
//! path, never manual capture.

use crate::domain::{FaceBox, Frame};
use crate::ports::{DetectError, FaceDetector};

/// Luma level at or above which a pixel counts as subject.
const DEFAULT_THRESHOLD: u8 = 128;

/// Bright regions smaller than this fraction of the frame are noise.
const MIN_REGION_FRACTION: f64 = 0.01;

pub struct LumaDetector {
    threshold: u8,
}

impl LumaDetector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_threshold(threshold: u8) -> Self {
        Self { threshold }
    }
}

impl Default for LumaDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceDetector for LumaDetector {
    fn detect(&self, frame: &Frame) -> Result<Option<FaceBox>, DetectError> {
        if frame.width == 0 || frame.height == 0 {
            return Err(DetectError::Failed("empty frame".to_string()));
        }

        let mut min_x = u32::MAX;
        let mut min_y = u32::MAX;
        let mut max_x = 0u32;
        let mut max_y = 0u32;
        let mut bright = 0usize;

        for y in 0..frame.height {
            for x in 0..frame.width {
                if frame.pixel(x, y) >= self.threshold {
                    bright += 1;
                    min_x = min_x.min(x);
                    min_y = min_y.min(y);
                    max_x = max_x.max(x);
                    max_y = max_y.max(y);
                }
            }
        }

        let total = (frame.width * frame.height) as usize;
        if bright == 0 || (bright as f64) / (total as f64) < MIN_REGION_FRACTION {
            return Ok(None);
        }

        Ok(Some(FaceBox {
            x: f64::from(min_x),
            y: f64::from(min_y),
            width: f64::from(max_x - min_x + 1),
            height: f64::from(max_y - min_y + 1),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with_block(x0: u32, y0: u32, size: u32) -> Frame {
        let (w, h) = (64, 48);
        let mut luma = vec![20u8; (w * h) as usize];
        for y in y0..(y0 + size).min(h) {
            for x in x0..(x0 + size).min(w) {
                luma[(y * w + x) as usize] = 220;
            }
        }
        Frame::new(w, h, luma)
    }

    #[test]
    fn test_finds_centered_block() {
        let detector = LumaDetector::new();
        let frame = frame_with_block(24, 16, 16);
        let face = detector
            .detect(&frame)
            .expect("Should run")
            .expect("Should find");
        assert!((face.x - 24.0).abs() < f64::EPSILON);
        assert!((face.y - 16.0).abs() < f64::EPSILON);
        assert!((face.width - 16.0).abs() < f64::EPSILON);
        assert!((face.height - 16.0).abs() < f64::EPSILON);

        let (dx, dy) = face.center_offset(frame.width, frame.height);
        assert!(dx < 0.01);
        assert!(dy < 0.01);
    }

    #[test]
    fn test_dark_frame_has_no_face() {
        let detector = LumaDetector::new();
        let frame = Frame::new(64, 48, vec![20; 64 * 48]);
        assert_eq!(detector.detect(&frame).expect("Should run"), None);
    }

    #[test]
    fn test_speckle_noise_is_ignored() {
        let detector = LumaDetector::new();
        let mut luma = vec![20u8; 64 * 48];
        luma[100] = 255; // a single hot pixel
        let frame = Frame::new(64, 48, luma);
        assert_eq!(detector.detect(&frame).expect("Should run"), None);
    }

    #[test]
    fn test_empty_frame_is_an_error() {
        let detector = LumaDetector::new();
        let frame = Frame::new(0, 0, vec![]);
        assert!(detector.detect(&frame).is_err());
    }
}
