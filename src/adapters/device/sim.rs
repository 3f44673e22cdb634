//! Simulated capture devices.
//!
//! Deterministic stand-ins for the capture rig: frames carry a bright square
//! subject whose position and size are scriptable, so the guided-capture
//! logic can be driven through every branch without hardware.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::{Frame, MediaArtifact};
use crate::ports::{Camera, CaptureError, Microphone};

use super::pgm;

const SIM_WIDTH: u32 = 64;
const SIM_HEIGHT: u32 = 48;
const BACKGROUND_LUMA: u8 = 16;
const SUBJECT_LUMA: u8 = 230;

/// The bright square a sim frame contains, if any.
#[derive(Debug, Clone, Copy)]
struct Subject {
    cx: u32,
    cy: u32,
    size: u32,
}

/// Simulated camera.
pub struct SimCamera {
    subject: Option<Subject>,
    fail_open: Option<CaptureError>,
    open: Arc<AtomicBool>,
}

impl SimCamera {
    /// A camera whose subject sits centered and well sized.
    #[must_use]
    pub fn centered() -> Self {
        Self::with_subject(SIM_WIDTH / 2, SIM_HEIGHT / 2, 16)
    }

    /// A camera whose subject sits outside the acceptance window.
    #[must_use]
    pub fn off_center() -> Self {
        Self::with_subject(5, 10, 10)
    }

    /// A camera with no subject in view.
    #[must_use]
    pub fn vacant() -> Self {
        Self {
            subject: None,
            fail_open: None,
            open: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A camera that fails to acquire with the given error.
    #[must_use]
    pub fn failing(err: CaptureError) -> Self {
        Self {
            subject: None,
            fail_open: Some(err),
            open: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn with_subject(cx: u32, cy: u32, size: u32) -> Self {
        Self {
            subject: Some(Subject { cx, cy, size }),
            fail_open: None,
            open: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Move the subject (or remove it) on a live camera, for scripting
    /// countdown-cancellation scenarios.
    pub fn set_subject(&mut self, subject: Option<(u32, u32, u32)>) {
        self.subject = subject.map(|(cx, cy, size)| Subject { cx, cy, size });
    }

    /// Shared handle observing whether the device is held open; survives the
    /// camera being moved into a controller.
    #[must_use]
    pub fn probe(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.open)
    }

    fn render(&self) -> Frame {
        let mut luma = vec![BACKGROUND_LUMA; (SIM_WIDTH * SIM_HEIGHT) as usize];
        if let Some(s) = self.subject {
            let half = s.size / 2;
            let x0 = s.cx.saturating_sub(half);
            let y0 = s.cy.saturating_sub(half);
            for y in y0..(y0 + s.size).min(SIM_HEIGHT) {
                for x in x0..(x0 + s.size).min(SIM_WIDTH) {
                    luma[(y * SIM_WIDTH + x) as usize] = SUBJECT_LUMA;
                }
            }
        }
        Frame::new(SIM_WIDTH, SIM_HEIGHT, luma)
    }
}

impl Camera for SimCamera {
    fn open(&mut self) -> Result<(), CaptureError> {
        if let Some(err) = &self.fail_open {
            return Err(err.clone());
        }
        self.open.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn frame(&mut self) -> Result<Frame, CaptureError> {
        if !self.open.load(Ordering::SeqCst) {
            return Err(CaptureError::Device("camera not open".to_string()));
        }
        Ok(self.render())
    }

    fn capture(&mut self) -> Result<MediaArtifact, CaptureError> {
        if !self.open.load(Ordering::SeqCst) {
            return Err(CaptureError::Device("camera not open".to_string()));
        }
        let bytes = pgm::encode_pgm(&self.render());
        Ok(MediaArtifact::image("image/x-portable-graymap", bytes))
    }

    fn close(&mut self) {
        self.open.store(false, Ordering::SeqCst);
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}

/// Simulated microphone producing a short silent WAV clip.
pub struct SimMicrophone {
    recording: bool,
    fail_start: Option<CaptureError>,
}

impl SimMicrophone {
    #[must_use]
    pub fn new() -> Self {
        Self {
            recording: false,
            fail_start: None,
        }
    }

    #[must_use]
    pub fn failing(err: CaptureError) -> Self {
        Self {
            recording: false,
            fail_start: Some(err),
        }
    }

    fn silent_wav() -> Vec<u8> {
        // Minimal PCM WAV: 8 kHz, mono, 8-bit, 800 samples of silence.
        const SAMPLES: u32 = 800;
        let data_len = SAMPLES;
        let mut out = Vec::with_capacity(44 + data_len as usize);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVEfmt ");
        out.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&1u16.to_le_bytes()); // mono
        out.extend_from_slice(&8000u32.to_le_bytes()); // sample rate
        out.extend_from_slice(&8000u32.to_le_bytes()); // byte rate
        out.extend_from_slice(&1u16.to_le_bytes()); // block align
        out.extend_from_slice(&8u16.to_le_bytes()); // bits per sample
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        out.resize(out.len() + data_len as usize, 128); // 8-bit silence midpoint
        out
    }
}

impl Default for SimMicrophone {
    fn default() -> Self {
        Self::new()
    }
}

impl Microphone for SimMicrophone {
    fn start(&mut self) -> Result<(), CaptureError> {
        if let Some(err) = &self.fail_start {
            return Err(err.clone());
        }
        self.recording = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<MediaArtifact, CaptureError> {
        if !self.recording {
            return Err(CaptureError::Device("not recording".to_string()));
        }
        self.recording = false;
        Ok(MediaArtifact::audio("audio/wav", Self::silent_wav()))
    }

    fn is_recording(&self) -> bool {
        self.recording
    }

    fn close(&mut self) {
        self.recording = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_subject_is_bright_at_center() {
        let mut camera = SimCamera::centered();
        camera.open().expect("Should open");
        let frame = camera.frame().expect("Should read");
        assert_eq!(frame.pixel(SIM_WIDTH / 2, SIM_HEIGHT / 2), SUBJECT_LUMA);
        assert_eq!(frame.pixel(0, 0), BACKGROUND_LUMA);
    }

    #[test]
    fn test_vacant_frame_is_uniform() {
        let mut camera = SimCamera::vacant();
        camera.open().expect("Should open");
        let frame = camera.frame().expect("Should read");
        assert!(frame.luma.iter().all(|&p| p == BACKGROUND_LUMA));
    }

    #[test]
    fn test_capture_is_decodable() {
        let mut camera = SimCamera::centered();
        camera.open().expect("Should open");
        let artifact = camera.capture().expect("Should capture");
        let frame = pgm::decode_pgm(&artifact.bytes).expect("Should decode");
        assert_eq!((frame.width, frame.height), (SIM_WIDTH, SIM_HEIGHT));
    }

    #[test]
    fn test_failing_camera_reports_its_error() {
        let mut camera = SimCamera::failing(CaptureError::PermissionDenied);
        assert_eq!(camera.open(), Err(CaptureError::PermissionDenied));
        assert!(!camera.is_open());
    }

    #[test]
    fn test_sim_clip_has_wav_header() {
        let mut mic = SimMicrophone::new();
        mic.start().expect("Should start");
        let clip = mic.stop().expect("Should stop");
        assert!(clip.bytes.starts_with(b"RIFF"));
        assert_eq!(&clip.bytes[8..12], b"WAVE");
    }
}
