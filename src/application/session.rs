//! Intake session: typed access to the wizard's store keys.
//!
//! Screens depend on this narrow surface instead of raw string keys, so each
//! one touches only the keys it owns. Reruns overwrite values in place; only
//! the questionnaire bundle is ever explicitly cleared.

use std::sync::Arc;

use crate::adapters::StoreError;
use crate::domain::{
    AgeBracket, Disease, Gender, Language, MediaArtifact, PhoneNumber, ResponseBundle,
};
use crate::ports::SessionStore;
use crate::MediscanError;

/// The flat key set, one writer screen per key.
pub mod keys {
    pub const LANGUAGE: &str = "selectedLanguage";
    pub const AGE: &str = "userAge";
    pub const GENDER: &str = "gender";
    pub const PATIENT_PHOTO: &str = "patientPhoto";
    pub const CNIC_PHOTO: &str = "cnicPhoto";
    pub const PHONE: &str = "phoneNumber";
    pub const DISEASE: &str = "selectedDisease";
    pub const QUESTIONNAIRE: &str = "questionnaireAnswers";
}

/// Session facade over the key-value store.
pub struct IntakeSession<S: SessionStore> {
    store: Arc<S>,
}

impl<S: SessionStore> Clone for IntakeSession<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> IntakeSession<S>
where
    S: SessionStore,
    S::Error: Into<StoreError>,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn get(&self, key: &str) -> Result<Option<String>, MediscanError> {
        self.store.get(key).map_err(|e| MediscanError::Store(e.into()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MediscanError> {
        self.store
            .set(key, value)
            .map_err(|e| MediscanError::Store(e.into()))
    }

    /// Persist the chosen language; survives restarts and is read back on
    /// the next launch.
    pub fn set_language(&self, lang: Language) -> Result<(), MediscanError> {
        self.set(keys::LANGUAGE, lang.code())
    }

    /// The persisted language, if one was ever chosen.
    pub fn language(&self) -> Result<Option<Language>, MediscanError> {
        Ok(self.get(keys::LANGUAGE)?.as_deref().and_then(Language::from_code))
    }

    pub fn set_age_bracket(&self, bracket: AgeBracket) -> Result<(), MediscanError> {
        self.set(keys::AGE, bracket.code())
    }

    pub fn age_bracket(&self) -> Result<Option<AgeBracket>, MediscanError> {
        Ok(self.get(keys::AGE)?.as_deref().and_then(AgeBracket::from_code))
    }

    /// Gender is collected but nothing downstream reads it.
    pub fn set_gender(&self, gender: Gender) -> Result<(), MediscanError> {
        self.set(keys::GENDER, gender.code())
    }

    pub fn set_phone(&self, phone: &PhoneNumber) -> Result<(), MediscanError> {
        self.set(keys::PHONE, phone.as_str())
    }

    pub fn phone(&self) -> Result<Option<PhoneNumber>, MediscanError> {
        match self.get(keys::PHONE)? {
            Some(stored) => match PhoneNumber::from_stored(&stored) {
                Ok(phone) => Ok(Some(phone)),
                Err(_) => {
                    tracing::warn!("stored phone number is not canonical; ignoring");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    pub fn set_disease(&self, disease: Disease) -> Result<(), MediscanError> {
        self.set(keys::DISEASE, disease.id())
    }

    pub fn disease(&self) -> Result<Option<Disease>, MediscanError> {
        Ok(self.get(keys::DISEASE)?.as_deref().and_then(Disease::from_id))
    }

    /// Persist a confirmed capture artifact under its step key, overwriting
    /// any previous run's artifact.
    pub fn save_artifact(&self, key: &str, artifact: &MediaArtifact) -> Result<(), MediscanError> {
        self.store
            .set_bytes(key, &artifact.bytes)
            .map_err(|e| MediscanError::Store(e.into()))?;
        tracing::info!(key, media_type = artifact.media_type, "artifact saved");
        Ok(())
    }

    pub fn has_artifact(&self, key: &str) -> Result<bool, MediscanError> {
        self.store
            .contains(key)
            .map_err(|e| MediscanError::Store(e.into()))
    }

    /// Persist the finalized questionnaire bundle as JSON.
    pub fn save_response_bundle(&self, bundle: &ResponseBundle) -> Result<(), MediscanError> {
        let json = serde_json::to_string(bundle)?;
        self.set(keys::QUESTIONNAIRE, &json)?;
        tracing::info!(
            disease = %bundle.disease,
            answers = bundle.answers.len(),
            "questionnaire bundle saved"
        );
        Ok(())
    }

    /// The stored bundle, read by the results screen.
    pub fn response_bundle(&self) -> Result<Option<ResponseBundle>, MediscanError> {
        match self.get(keys::QUESTIONNAIRE)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Back-to-start clears the questionnaire bundle and nothing else.
    pub fn clear_answers(&self) -> Result<(), MediscanError> {
        self.store
            .remove(keys::QUESTIONNAIRE)
            .map_err(|e| MediscanError::Store(e.into()))
    }
}
