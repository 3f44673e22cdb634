//! Localization: typed message catalog and per-disease question lists.
//!
//! Messages are a closed enum rather than dotted string paths, so a missing
//! translation is an explicit [`lookup`] outcome instead of a silent echo of
//! the key. English is total; Urdu and Sindhi may have gaps, which [`text`]
//! papers over by falling back to English.

mod catalog;
mod questions;

pub use questions::questions;

use crate::domain::Language;

/// Every user-facing string in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    // Language selection
    LanguageTitle,
    LanguageSubtitle,

    // Age verification
    AgeTitle,
    AgeQuestion,
    AgeUnder18,
    AgeAbove18,

    // Gender selection
    GenderTitle,
    GenderQuestion,
    GenderMale,
    GenderFemale,
    GenderOther,
    GenderPreferNotToSay,

    // Guided patient photo
    CameraTitle,
    CameraInstruction,
    CameraCapture,
    CameraRetake,
    CameraContinue,
    CameraLoading,
    CameraPermissionError,
    CameraNoDevice,
    MicError,

    // Identity document
    CnicTitle,
    CnicInstruction,
    CnicCapture,

    // Phone number
    PhoneTitle,
    PhoneInstruction,
    PhoneLabel,
    PhonePlaceholder,
    PhoneContinue,
    PhoneInvalid,
    PhoneFormat,

    // Disease selection
    DiseaseTitle,
    DiseaseInstruction,
    DiseaseEyes,
    DiseaseBreathing,
    DiseaseSkin,
    DiseaseDengue,

    // Breathing capture (X-ray + stethoscope)
    BreathingTitle,
    BreathingXrayTitle,
    BreathingXrayInstruction,
    BreathingXrayCapture,
    BreathingStethTitle,
    BreathingStethInstruction,
    BreathingStethRecord,
    BreathingStethStop,

    // Eyes capture
    EyesCaptureTitle,
    EyesCaptureInstruction,
    EyesCaptureAction,

    // Dengue capture
    DengueCaptureTitle,
    DengueCaptureInstruction,
    DengueCaptureAction,

    // Skin capture
    SkinCaptureTitle,
    SkinCaptureInstruction,
    SkinCaptureAction,
    SkinFrameGuide,

    // Questionnaire
    QuestionnaireTitle,
    QuestionnaireQuestion,
    QuestionnaireOf,
    QuestionnaireYes,
    QuestionnaireNo,
    QuestionnaireSometimes,
    SeverityMild,
    SeverityModerate,
    SeveritySevere,

    // Results
    ResultsTitle,
    ResultsSummary,
    ResultsRecommendations,
    ResultsSeverity,
    ResultsBackToHome,
    ResultsDownloadReport,
}

/// One catalog row: the dotted key (diagnostics only) plus per-language text.
pub struct Entry {
    pub key: &'static str,
    pub en: &'static str,
    pub ur: Option<&'static str>,
    pub sd: Option<&'static str>,
}

/// The localized string, or `None` when this language has no translation.
#[must_use]
pub fn lookup(lang: Language, msg: Msg) -> Option<&'static str> {
    let entry = catalog::entry(msg);
    match lang {
        Language::English => Some(entry.en),
        Language::Urdu => entry.ur,
        Language::Sindhi => entry.sd,
    }
}

/// The localized string with English fallback. Never fails: English is total.
#[must_use]
pub fn text(lang: Language, msg: Msg) -> &'static str {
    lookup(lang, msg).unwrap_or(catalog::entry(msg).en)
}

/// The dotted key path for a message, for diagnostics.
#[must_use]
pub fn key(msg: Msg) -> &'static str {
    catalog::entry(msg).key
}

/// The message carrying a severity tier's localized label.
#[must_use]
pub fn severity_msg(severity: crate::domain::Severity) -> Msg {
    match severity {
        crate::domain::Severity::Mild => Msg::SeverityMild,
        crate::domain::Severity::Moderate => Msg::SeverityModerate,
        crate::domain::Severity::Severe => Msg::SeveritySevere,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_reports_missing_translation() {
        // The microphone error exists only in English.
        assert!(lookup(Language::English, Msg::MicError).is_some());
        assert_eq!(lookup(Language::Urdu, Msg::MicError), None);
        assert_eq!(lookup(Language::Sindhi, Msg::MicError), None);
    }

    #[test]
    fn test_text_falls_back_to_english() {
        assert_eq!(
            text(Language::Sindhi, Msg::MicError),
            text(Language::English, Msg::MicError)
        );
    }

    #[test]
    fn test_translated_messages_differ_per_language() {
        let en = text(Language::English, Msg::PhoneInvalid);
        let ur = text(Language::Urdu, Msg::PhoneInvalid);
        let sd = text(Language::Sindhi, Msg::PhoneInvalid);
        assert_ne!(en, ur);
        assert_ne!(en, sd);
    }

    #[test]
    fn test_key_paths_are_dotted() {
        assert_eq!(key(Msg::PhoneInvalid), "phoneNumber.error");
        assert_eq!(key(Msg::ResultsTitle), "results.title");
    }
}
