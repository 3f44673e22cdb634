//! Questionnaire answers and the persisted response bundle.

use serde::{Deserialize, Serialize};

use super::Disease;

/// One of the three fixed answer options offered for every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    Sometimes,
}

impl Answer {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Sometimes => "sometimes",
        }
    }

    /// Scoring weight: affirmative counts fully, intermittent half.
    #[must_use]
    pub fn weight(&self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::No => 0.0,
            Self::Sometimes => 0.5,
        }
    }
}

/// An ordered answer sheet: exactly one slot per question index.
///
/// Slots fill monotonically as the engine advances; re-recording at an index
/// before the advance fires overwrites that slot only.
#[derive(Debug, Clone)]
pub struct AnswerSheet {
    slots: Vec<Option<Answer>>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Record (or overwrite) the answer at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range; the engine only ever records at its
    /// own cursor.
    pub fn record(&mut self, index: usize, answer: Answer) {
        self.slots[index] = Some(answer);
    }

    #[must_use]
    pub fn answer_at(&self, index: usize) -> Option<Answer> {
        self.slots.get(index).copied().flatten()
    }

    /// True once every slot holds an answer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The recorded answers in question order, once complete.
    #[must_use]
    pub fn recorded(&self) -> Option<Vec<Answer>> {
        self.slots.iter().copied().collect()
    }
}

/// The finalized questionnaire run, persisted under `questionnaireAnswers`
/// and read exactly once by the results screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseBundle {
    /// Unique identifier for this run.
    pub id: String,

    /// Disease the question list belonged to.
    #[serde(rename = "diseaseId")]
    pub disease: Disease,

    /// One answer per question, in question order.
    pub answers: Vec<Answer>,

    /// Submission time.
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ResponseBundle {
    /// Package a completed sheet.
    #[must_use]
    pub fn new(disease: Disease, answers: Vec<Answer>) -> Self {
        Self {
            id: uuid_v4(),
            disease,
            answers,
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Generate a simple UUID v4 (random) using a CSPRNG.
///
/// ChaCha20Rng seeded from OS entropy, so bundle ids are unpredictable on all
/// platforms.
pub(crate) fn uuid_v4() -> String {
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_entropy();
    let bytes: [u8; 16] = rng.gen();

    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        (bytes[6] & 0x0f) | 0x40, bytes[7],
        (bytes[8] & 0x3f) | 0x80, bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_fills_one_slot_per_index() {
        let mut sheet = AnswerSheet::new(3);
        assert!(!sheet.is_complete());

        sheet.record(0, Answer::Yes);
        sheet.record(1, Answer::No);
        assert!(!sheet.is_complete());
        assert_eq!(sheet.answer_at(2), None);

        sheet.record(2, Answer::Sometimes);
        assert!(sheet.is_complete());
        assert_eq!(
            sheet.recorded(),
            Some(vec![Answer::Yes, Answer::No, Answer::Sometimes])
        );
    }

    #[test]
    fn test_sheet_overwrite_same_index() {
        let mut sheet = AnswerSheet::new(2);
        sheet.record(0, Answer::Yes);
        sheet.record(0, Answer::No);
        assert_eq!(sheet.answer_at(0), Some(Answer::No));
    }

    #[test]
    fn test_bundle_serialization_shape() {
        let bundle = ResponseBundle::new(Disease::Dengue, vec![Answer::Yes, Answer::Sometimes]);
        let json = serde_json::to_string(&bundle).expect("Should serialize");
        assert!(json.contains("\"diseaseId\":\"dengue\""));
        assert!(json.contains("\"yes\""));
        assert!(json.contains("\"sometimes\""));

        let back: ResponseBundle = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(back.disease, Disease::Dengue);
        assert_eq!(back.answers.len(), 2);
        assert_eq!(back.id, bundle.id);
    }

    #[test]
    fn test_uuid_generation() {
        let id1 = uuid_v4();
        let id2 = uuid_v4();
        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36);
    }
}
