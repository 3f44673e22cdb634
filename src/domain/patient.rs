//! Patient demographics: age bracket, gender and the contact phone number.

use serde::{Deserialize, Serialize};

/// Age bracket collected on the verification screen.
///
/// The only downstream effect is routing: adults pass through the
/// identity-document capture step, minors skip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBracket {
    Under18,
    Above18,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 2] = [AgeBracket::Under18, AgeBracket::Above18];

    /// Persisted form under `userAge`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Under18 => "under18",
            Self::Above18 => "above18",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "under18" => Some(Self::Under18),
            "above18" => Some(Self::Above18),
            _ => None,
        }
    }

    /// Whether this bracket routes through identity-document capture.
    #[must_use]
    pub fn requires_identity_document(&self) -> bool {
        matches!(self, Self::Above18)
    }
}

/// Gender choice. Collected and persisted, never read by downstream logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Other,
        Gender::PreferNotToSay,
    ];

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::PreferNotToSay => "preferNotToSay",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            "preferNotToSay" => Some(Self::PreferNotToSay),
            _ => None,
        }
    }
}

/// Error raised when a raw phone entry matches none of the accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("phone number does not match an accepted shape")]
pub struct PhoneError;

/// A validated Pakistani mobile number in the canonical display form
/// `+92 - 3XXXXXXXXX`.
///
/// Exactly three raw digit shapes are accepted:
/// - `92` + `3XXXXXXXXX` (12 digits, country code)
/// - `0` + `3XXXXXXXXX` (11 digits, trunk prefix)
/// - `3XXXXXXXXX` (10 digits, bare)
///
/// All three canonicalize to the same stored form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate a raw entry (formatted or not) and produce the canonical form.
    ///
    /// # Errors
    /// Returns [`PhoneError`] if the stripped digits match none of the three
    /// accepted shapes.
    pub fn parse(raw: &str) -> Result<Self, PhoneError> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let subscriber = match digits.len() {
            12 if digits.starts_with("92") && digits.as_bytes()[2] == b'3' => &digits[2..],
            11 if digits.starts_with("03") => &digits[1..],
            10 if digits.starts_with('3') => &digits[..],
            _ => return Err(PhoneError),
        };
        Ok(Self(format!("+92 - {subscriber}")))
    }

    /// Reconstruct from an already-canonical stored value.
    ///
    /// # Errors
    /// Returns [`PhoneError`] if the stored value is not canonical.
    pub fn from_stored(stored: &str) -> Result<Self, PhoneError> {
        let parsed = Self::parse(stored)?;
        if parsed.0 == stored {
            Ok(parsed)
        } else {
            Err(PhoneError)
        }
    }

    /// Canonical display/storage form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing ten subscriber digits (`3XXXXXXXXX`).
    #[must_use]
    pub fn subscriber(&self) -> &str {
        &self.0["+92 - ".len()..]
    }

    /// Live display formatting applied while the user types.
    ///
    /// Strips non-digits and re-inserts the fixed `+92 - ` prefix so the
    /// entry field always previews the canonical shape. Purely cosmetic; no
    /// validation happens here.
    #[must_use]
    pub fn format_partial(raw: &str) -> String {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return String::new();
        }
        let rest = if let Some(rest) = digits.strip_prefix("92") {
            rest
        } else if let Some(rest) = digits.strip_prefix('0') {
            rest
        } else {
            digits.as_str()
        };
        if rest.is_empty() {
            "+92".to_string()
        } else {
            format!("+92 - {rest}")
        }
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_shapes_share_canonical_form() {
        let canonical = "+92 - 3001234567";
        for raw in ["923001234567", "03001234567", "3001234567"] {
            let phone = PhoneNumber::parse(raw).expect("Should accept");
            assert_eq!(phone.as_str(), canonical);
            assert_eq!(phone.subscriber(), "3001234567");
        }
    }

    #[test]
    fn test_formatted_input_is_accepted() {
        let phone = PhoneNumber::parse("+92 - 3001234567").expect("Should accept");
        assert_eq!(phone.as_str(), "+92 - 3001234567");
    }

    #[test]
    fn test_rejects_wrong_shapes() {
        for raw in [
            "",
            "abc",
            "300123456",     // 9 digits
            "30012345678",   // 11 digits without trunk zero
            "920001234567",  // country code but not mobile prefix
            "04001234567",   // trunk zero but not mobile prefix
            "9230012345678", // 13 digits
            "1234567890",    // 10 digits, wrong prefix
        ] {
            assert!(PhoneNumber::parse(raw).is_err(), "should reject {raw:?}");
        }
    }

    #[test]
    fn test_format_partial() {
        assert_eq!(PhoneNumber::format_partial(""), "");
        assert_eq!(PhoneNumber::format_partial("92"), "+92");
        assert_eq!(PhoneNumber::format_partial("0"), "+92");
        assert_eq!(PhoneNumber::format_partial("923"), "+92 - 3");
        assert_eq!(PhoneNumber::format_partial("0300"), "+92 - 300");
        assert_eq!(PhoneNumber::format_partial("3001234567"), "+92 - 3001234567");
        assert_eq!(
            PhoneNumber::format_partial("+92 - 300"),
            "+92 - 300",
            "re-formatting a formatted value is stable"
        );
    }

    #[test]
    fn test_from_stored_requires_canonical() {
        assert!(PhoneNumber::from_stored("+92 - 3001234567").is_ok());
        assert!(PhoneNumber::from_stored("03001234567").is_err());
    }
}
