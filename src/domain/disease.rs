//! Disease categories the wizard can screen for.

use serde::{Deserialize, Serialize};

/// The four screening categories. The id string appears in routes
/// (`/disease-capture/{id}`), in storage (`selectedDisease`) and in the
/// questionnaire bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disease {
    Eyes,
    Breathing,
    Skin,
    Dengue,
}

impl Disease {
    /// Display/selection order.
    pub const ALL: [Disease; 4] = [
        Disease::Eyes,
        Disease::Breathing,
        Disease::Skin,
        Disease::Dengue,
    ];

    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::Eyes => "eyes",
            Self::Breathing => "breathing",
            Self::Skin => "skin",
            Self::Dengue => "dengue",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "eyes" => Some(Self::Eyes),
            "breathing" => Some(Self::Breathing),
            "skin" => Some(Self::Skin),
            "dengue" => Some(Self::Dengue),
            _ => None,
        }
    }

    /// Storage keys for the media this disease's capture screen produces.
    ///
    /// Breathing is the only composite capture (X-ray image plus stethoscope
    /// audio); the others persist a single image.
    #[must_use]
    pub fn media_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Eyes => &["eyesPhoto"],
            Self::Breathing => &["breathingXray", "breathingAudio"],
            Self::Skin => &["skinPhoto"],
            Self::Dengue => &["dengueKit"],
        }
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        for disease in Disease::ALL {
            assert_eq!(Disease::from_id(disease.id()), Some(disease));
        }
        assert_eq!(Disease::from_id("malaria"), None);
    }

    #[test]
    fn test_breathing_is_composite() {
        assert_eq!(Disease::Breathing.media_keys().len(), 2);
        for disease in [Disease::Eyes, Disease::Skin, Disease::Dengue] {
            assert_eq!(disease.media_keys().len(), 1);
        }
    }

    #[test]
    fn test_serde_uses_id() {
        let json = serde_json::to_string(&Disease::Dengue).expect("Should serialize");
        assert_eq!(json, "\"dengue\"");
    }
}
