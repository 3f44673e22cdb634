//! Minimal binary PGM (P5) codec for spool frames.
//!
//! The capture rig drops one P5 file per preview frame; nothing in the
//! ecosystem is pulled in for a format this small.

use crate::domain::Frame;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PgmError {
    #[error("not a binary PGM (P5) file")]
    BadMagic,

    #[error("malformed PGM header")]
    BadHeader,

    #[error("unsupported max value {0} (only 8-bit supported)")]
    BadMaxVal(u32),

    #[error("pixel data truncated: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },
}

/// Decode a binary PGM file into a luma frame.
///
/// Header comments (`#` to end of line) are tolerated.
///
/// # Errors
/// Returns [`PgmError`] on any structural problem.
pub fn decode_pgm(bytes: &[u8]) -> Result<Frame, PgmError> {
    if !bytes.starts_with(b"P5") {
        return Err(PgmError::BadMagic);
    }

    let mut pos = 2;
    let mut fields = [0u32; 3];
    for field in &mut fields {
        *field = read_header_int(bytes, &mut pos)?;
    }
    // Exactly one whitespace byte separates the header from pixel data.
    pos += 1;

    let [width, height, maxval] = fields;
    if maxval == 0 || maxval > 255 {
        return Err(PgmError::BadMaxVal(maxval));
    }

    let expected = (width as usize) * (height as usize);
    let data = bytes.get(pos..pos + expected).ok_or(PgmError::Truncated {
        expected,
        found: bytes.len().saturating_sub(pos),
    })?;

    Ok(Frame::new(width, height, data.to_vec()))
}

/// Encode a luma frame as a binary PGM file.
#[must_use]
pub fn encode_pgm(frame: &Frame) -> Vec<u8> {
    let header = format!("P5\n{} {}\n255\n", frame.width, frame.height);
    let mut out = Vec::with_capacity(header.len() + frame.luma.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(&frame.luma);
    out
}

/// Read the next whitespace-delimited decimal from the header, skipping
/// comments. Leaves `pos` on the byte after the last digit.
fn read_header_int(bytes: &[u8], pos: &mut usize) -> Result<u32, PgmError> {
    // Skip whitespace and comment lines.
    loop {
        match bytes.get(*pos) {
            Some(b) if b.is_ascii_whitespace() => *pos += 1,
            Some(b'#') => {
                while let Some(b) = bytes.get(*pos) {
                    *pos += 1;
                    if *b == b'\n' {
                        break;
                    }
                }
            }
            Some(_) => break,
            None => return Err(PgmError::BadHeader),
        }
    }

    let start = *pos;
    while let Some(b) = bytes.get(*pos) {
        if b.is_ascii_digit() {
            *pos += 1;
        } else {
            break;
        }
    }
    if *pos == start {
        return Err(PgmError::BadHeader);
    }

    std::str::from_utf8(&bytes[start..*pos])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(PgmError::BadHeader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let frame = Frame::new(4, 2, vec![0, 64, 128, 255, 10, 20, 30, 40]);
        let encoded = encode_pgm(&frame);
        let decoded = decode_pgm(&encoded).expect("Should decode");
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_tolerates_comments() {
        let mut bytes = b"P5\n# spool frame 0007\n2 1\n255\n".to_vec();
        bytes.extend_from_slice(&[9, 200]);
        let frame = decode_pgm(&bytes).expect("Should decode");
        assert_eq!((frame.width, frame.height), (2, 1));
        assert_eq!(frame.luma, vec![9, 200]);
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(decode_pgm(b"P6\n1 1\n255\nx"), Err(PgmError::BadMagic));
        assert!(matches!(
            decode_pgm(b"P5\n4 4\n255\nxy"),
            Err(PgmError::Truncated { .. })
        ));
        assert_eq!(decode_pgm(b"P5\n1 1\n999\nx"), Err(PgmError::BadMaxVal(999)));
    }
}
