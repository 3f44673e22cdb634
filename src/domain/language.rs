//! Supported interface languages.

use serde::{Deserialize, Serialize};

/// Languages the wizard can run in.
///
/// The code strings double as the persisted form under `selectedLanguage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// English
    English,
    /// Urdu
    Urdu,
    /// Sindhi
    Sindhi,
}

impl Language {
    /// All selectable languages, in display order.
    pub const ALL: [Language; 3] = [Language::English, Language::Sindhi, Language::Urdu];

    /// The locale code used in storage and question-list lookup.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Urdu => "ur",
            Self::Sindhi => "sd",
        }
    }

    /// Parse a stored locale code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "ur" => Some(Self::Urdu),
            "sd" => Some(Self::Sindhi),
            _ => None,
        }
    }

    /// Native-script name shown on the selection screen.
    #[must_use]
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Urdu => "اردو",
            Self::Sindhi => "سنڌي",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
    }
}
