//! Wizard routing: path parsing, redirects and the forward-flow gates.

use crate::domain::{AgeBracket, Disease};

/// One wizard step. Parsing never fails: unknown paths resolve to the
/// language screen and unknown disease ids to disease selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Language,
    AgeVerification,
    GenderSelection,
    CameraCapture,
    CnicCapture,
    PhoneNumber,
    DiseaseSelection,
    DiseaseCapture(Disease),
    Questionnaire(Disease),
    Results,
}

impl Route {
    /// Resolve a path to a route, applying the redirect rules.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };

        match path {
            "/" => Self::Language,
            "/age-verification" => Self::AgeVerification,
            "/gender-selection" => Self::GenderSelection,
            "/camera-capture" => Self::CameraCapture,
            "/cnic-capture" => Self::CnicCapture,
            "/phone-number" => Self::PhoneNumber,
            "/disease-selection" => Self::DiseaseSelection,
            "/results" => Self::Results,
            _ => {
                if let Some(id) = path.strip_prefix("/disease-capture/") {
                    match Disease::from_id(id) {
                        Some(disease) => Self::DiseaseCapture(disease),
                        None => Self::DiseaseSelection,
                    }
                } else if let Some(id) = path.strip_prefix("/questionnaire/") {
                    match Disease::from_id(id) {
                        Some(disease) => Self::Questionnaire(disease),
                        None => Self::DiseaseSelection,
                    }
                } else {
                    Self::Language
                }
            }
        }
    }

    /// The canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Language => "/".to_string(),
            Self::AgeVerification => "/age-verification".to_string(),
            Self::GenderSelection => "/gender-selection".to_string(),
            Self::CameraCapture => "/camera-capture".to_string(),
            Self::CnicCapture => "/cnic-capture".to_string(),
            Self::PhoneNumber => "/phone-number".to_string(),
            Self::DiseaseSelection => "/disease-selection".to_string(),
            Self::DiseaseCapture(d) => format!("/disease-capture/{}", d.id()),
            Self::Questionnaire(d) => format!("/questionnaire/{}", d.id()),
            Self::Results => "/results".to_string(),
        }
    }
}

/// The age gate after the patient photo is confirmed: adults pass through
/// identity-document capture, everyone else goes straight to phone entry.
#[must_use]
pub fn after_patient_photo(age: Option<AgeBracket>) -> Route {
    match age {
        Some(bracket) if bracket.requires_identity_document() => Route::CnicCapture,
        _ => Route::PhoneNumber,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_roundtrip() {
        let routes = [
            Route::Language,
            Route::AgeVerification,
            Route::GenderSelection,
            Route::CameraCapture,
            Route::CnicCapture,
            Route::PhoneNumber,
            Route::DiseaseSelection,
            Route::DiseaseCapture(Disease::Breathing),
            Route::Questionnaire(Disease::Dengue),
            Route::Results,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_unknown_path_redirects_to_language() {
        for path in ["/login", "/dashboard", "/nope/nested", "///x"] {
            assert_eq!(Route::parse(path), Route::Language);
        }
    }

    #[test]
    fn test_unknown_disease_redirects_to_selection() {
        assert_eq!(
            Route::parse("/disease-capture/malaria"),
            Route::DiseaseSelection
        );
        assert_eq!(
            Route::parse("/questionnaire/malaria"),
            Route::DiseaseSelection
        );
    }

    #[test]
    fn test_age_gate() {
        assert_eq!(
            after_patient_photo(Some(AgeBracket::Above18)),
            Route::CnicCapture
        );
        assert_eq!(
            after_patient_photo(Some(AgeBracket::Under18)),
            Route::PhoneNumber
        );
        // An unset bracket skips the document step rather than blocking.
        assert_eq!(after_patient_photo(None), Route::PhoneNumber);
    }
}
