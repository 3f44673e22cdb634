//! Spool-directory devices: the capture rig drops files, we read them.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::domain::{Frame, MediaArtifact};
use crate::ports::{Camera, CaptureError, Microphone};

use super::{io_to_capture, pgm};

/// Camera backed by PGM frames in a spool directory.
///
/// The rig writes monotonically named frame files; the lexicographically
/// last `.pgm` is the live frame.
pub struct SpoolCamera {
    dir: PathBuf,
    open: bool,
}

impl SpoolCamera {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            open: false,
        }
    }

    fn latest(&self, extension: &str) -> Result<PathBuf, CaptureError> {
        latest_file(&self.dir, extension)?.ok_or(CaptureError::NoDevice)
    }
}

impl Camera for SpoolCamera {
    fn open(&mut self) -> Result<(), CaptureError> {
        // Probe the spool: the rig is "present" when at least one frame is.
        self.latest("pgm")?;
        self.open = true;
        tracing::debug!(dir = %self.dir.display(), "spool camera opened");
        Ok(())
    }

    fn frame(&mut self) -> Result<Frame, CaptureError> {
        if !self.open {
            return Err(CaptureError::Device("camera not open".to_string()));
        }
        let path = self.latest("pgm")?;
        let bytes = fs::read(&path).map_err(|e| io_to_capture(&e))?;
        pgm::decode_pgm(&bytes).map_err(|e| CaptureError::Device(e.to_string()))
    }

    fn capture(&mut self) -> Result<MediaArtifact, CaptureError> {
        if !self.open {
            return Err(CaptureError::Device("camera not open".to_string()));
        }
        let path = self.latest("pgm")?;
        let bytes = fs::read(&path).map_err(|e| io_to_capture(&e))?;
        Ok(MediaArtifact::image("image/x-portable-graymap", bytes))
    }

    fn close(&mut self) {
        if self.open {
            tracing::debug!(dir = %self.dir.display(), "spool camera closed");
        }
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

/// Microphone backed by clip files in the spool directory.
///
/// `start` verifies the rig is present; `stop` takes the lexicographically
/// last `.wav` as the recorded clip.
pub struct SpoolMicrophone {
    dir: PathBuf,
    started_at: Option<Instant>,
}

impl SpoolMicrophone {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            started_at: None,
        }
    }
}

impl Microphone for SpoolMicrophone {
    fn start(&mut self) -> Result<(), CaptureError> {
        latest_file(&self.dir, "wav")?.ok_or(CaptureError::NoDevice)?;
        self.started_at = Some(Instant::now());
        tracing::debug!(dir = %self.dir.display(), "spool microphone recording");
        Ok(())
    }

    fn stop(&mut self) -> Result<MediaArtifact, CaptureError> {
        if self.started_at.take().is_none() {
            return Err(CaptureError::Device("not recording".to_string()));
        }
        let path = latest_file(&self.dir, "wav")?.ok_or(CaptureError::NoDevice)?;
        let bytes = fs::read(&path).map_err(|e| io_to_capture(&e))?;
        Ok(MediaArtifact::audio("audio/wav", bytes))
    }

    fn is_recording(&self) -> bool {
        self.started_at.is_some()
    }

    fn close(&mut self) {
        self.started_at = None;
    }
}

/// The lexicographically last file with the given extension, or `None` when
/// the directory exists but holds no such file.
fn latest_file(dir: &Path, extension: &str) -> Result<Option<PathBuf>, CaptureError> {
    let entries = fs::read_dir(dir).map_err(|e| io_to_capture(&e))?;

    let mut best: Option<PathBuf> = None;
    for entry in entries {
        let entry = entry.map_err(|e| io_to_capture(&e))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        if best.as_ref().map_or(true, |b| path > *b) {
            best = Some(path);
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Frame;

    #[test]
    fn test_missing_spool_is_no_device() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent");

        let mut camera = SpoolCamera::new(&missing);
        assert_eq!(camera.open(), Err(CaptureError::NoDevice));

        let mut mic = SpoolMicrophone::new(&missing);
        assert_eq!(mic.start(), Err(CaptureError::NoDevice));
    }

    #[test]
    fn test_empty_spool_is_no_device() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut camera = SpoolCamera::new(dir.path());
        assert_eq!(camera.open(), Err(CaptureError::NoDevice));
    }

    #[test]
    fn test_reads_latest_frame() {
        let dir = tempfile::tempdir().expect("tempdir");
        let older = Frame::new(2, 1, vec![1, 2]);
        let newer = Frame::new(2, 1, vec![3, 4]);
        fs::write(dir.path().join("frame-0001.pgm"), pgm::encode_pgm(&older)).expect("write");
        fs::write(dir.path().join("frame-0002.pgm"), pgm::encode_pgm(&newer)).expect("write");

        let mut camera = SpoolCamera::new(dir.path());
        camera.open().expect("Should open");
        assert!(camera.is_open());
        assert_eq!(camera.frame().expect("Should read"), newer);

        let artifact = camera.capture().expect("Should capture");
        assert_eq!(artifact.media_type, "image/x-portable-graymap");
        assert_eq!(artifact.bytes, pgm::encode_pgm(&newer));

        camera.close();
        assert!(!camera.is_open());
        assert!(camera.frame().is_err());
    }

    #[test]
    fn test_microphone_clip_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("clip-0001.wav"), b"RIFFxxxx").expect("write");

        let mut mic = SpoolMicrophone::new(dir.path());
        assert!(!mic.is_recording());
        mic.start().expect("Should start");
        assert!(mic.is_recording());

        let artifact = mic.stop().expect("Should stop");
        assert_eq!(artifact.media_type, "audio/wav");
        assert_eq!(artifact.bytes, b"RIFFxxxx");
        assert!(!mic.is_recording());

        // Stopping again without a start is an error.
        assert!(mic.stop().is_err());
    }
}
