//! Risk scoring over a completed questionnaire.
//!
//! No inference happens here: the score is a fixed weighted count over the
//! yes/no/sometimes answers, and the severity tier is a step function of it.

use serde::{Deserialize, Serialize};

use super::{Answer, Disease, ResponseBundle};

/// Severity tier, a deterministic step function of the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Tier thresholds: `severe` at 70 and above, `moderate` at 40 and above.
    #[must_use]
    pub fn from_score(risk_score: u8) -> Self {
        if risk_score >= 70 {
            Self::Severe
        } else if risk_score >= 40 {
            Self::Moderate
        } else {
            Self::Mild
        }
    }

    /// Associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Mild => (16, 185, 129),     // Emerald (#10B981)
            Self::Moderate => (251, 191, 36), // Amber (#FBBF24)
            Self::Severe => (244, 63, 94),    // Rose (#F43F5E)
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mild => write!(f, "MILD"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::Severe => write!(f, "SEVERE"),
        }
    }
}

/// The computed summary shown on the results screen and exported to the
/// report. Recomputed from the stored bundle on every load, never persisted
/// on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub disease: Disease,
    /// Weighted percentage, 0–100.
    pub risk_score: u8,
    pub severity: Severity,
    pub yes_count: usize,
    pub sometimes_count: usize,
    pub total_questions: usize,
}

impl Assessment {
    /// Score a finalized bundle.
    ///
    /// `riskScore = round(((yes * 1 + sometimes * 0.5) / n) * 100)`.
    #[must_use]
    pub fn from_bundle(bundle: &ResponseBundle) -> Self {
        Self::from_answers(bundle.disease, &bundle.answers)
    }

    #[must_use]
    pub fn from_answers(disease: Disease, answers: &[Answer]) -> Self {
        let yes_count = answers.iter().filter(|a| **a == Answer::Yes).count();
        let sometimes_count = answers.iter().filter(|a| **a == Answer::Sometimes).count();
        let total_questions = answers.len();

        let risk_score = if total_questions == 0 {
            0
        } else {
            let weighted: f64 = answers.iter().map(Answer::weight).sum();
            (weighted / total_questions as f64 * 100.0).round() as u8
        };

        Self {
            disease,
            risk_score,
            severity: Severity::from_score(risk_score),
            yes_count,
            sometimes_count,
            total_questions,
        }
    }

    /// Canned guidance for this disease and tier.
    #[must_use]
    pub fn recommendations(&self) -> &'static [&'static str] {
        recommendations(self.disease, self.severity)
    }
}

/// Fixed guidance text per (disease, severity). The table is total over both
/// enums, so every lookup lands on a concrete list.
#[must_use]
pub fn recommendations(disease: Disease, severity: Severity) -> &'static [&'static str] {
    match (disease, severity) {
        (Disease::Eyes, Severity::Mild) => &[
            "Use artificial tears to keep your eyes moist",
            "Avoid rubbing your eyes",
            "Take regular breaks from screen time",
            "Consult an ophthalmologist if symptoms persist",
        ],
        (Disease::Eyes, Severity::Moderate) => &[
            "Schedule an appointment with an ophthalmologist immediately",
            "Avoid wearing contact lenses until consultation",
            "Apply cold compresses to reduce inflammation",
            "Keep your eyes clean and avoid touching them",
        ],
        (Disease::Eyes, Severity::Severe) => &[
            "Seek immediate medical attention",
            "Do not delay visiting an eye specialist",
            "Avoid self-medication",
            "Follow up with regular check-ups",
        ],
        (Disease::Breathing, Severity::Mild) => &[
            "Practice deep breathing exercises",
            "Avoid exposure to allergens and pollutants",
            "Stay hydrated and maintain good air quality",
            "Monitor your symptoms and consult if they worsen",
        ],
        (Disease::Breathing, Severity::Moderate) => &[
            "Consult a pulmonologist as soon as possible",
            "Avoid smoking and secondhand smoke",
            "Use a humidifier in your living space",
            "Keep your rescue inhaler handy if prescribed",
        ],
        (Disease::Breathing, Severity::Severe) => &[
            "Seek emergency medical care immediately",
            "Do not ignore breathing difficulties",
            "Avoid strenuous activities",
            "Follow up with a respiratory specialist",
        ],
        (Disease::Skin, Severity::Mild) => &[
            "Keep your skin clean and moisturized",
            "Use gentle, fragrance-free skincare products",
            "Avoid scratching or picking at affected areas",
            "Protect your skin from excessive sun exposure",
        ],
        (Disease::Skin, Severity::Moderate) => &[
            "Consult a dermatologist for proper diagnosis",
            "Avoid using harsh chemicals on your skin",
            "Follow a gentle skincare routine",
            "Consider patch testing for allergies",
        ],
        (Disease::Skin, Severity::Severe) => &[
            "Seek immediate dermatological consultation",
            "Do not self-treat with over-the-counter medications",
            "Keep affected areas clean and covered",
            "Follow medical advice strictly",
        ],
        (Disease::Dengue, Severity::Mild) => &[
            "Rest and stay hydrated",
            "Monitor your temperature regularly",
            "Take paracetamol for fever (avoid aspirin)",
            "Watch for warning signs and seek medical help if needed",
        ],
        (Disease::Dengue, Severity::Moderate) => &[
            "Consult a doctor immediately",
            "Maintain adequate fluid intake",
            "Monitor for signs of bleeding",
            "Avoid self-medication",
        ],
        (Disease::Dengue, Severity::Severe) => &[
            "Seek emergency medical attention immediately",
            "Dengue can be life-threatening if not treated properly",
            "Do not delay medical consultation",
            "Follow hospital admission if recommended",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(yes: usize, sometimes: usize, no: usize) -> Vec<Answer> {
        let mut v = vec![Answer::Yes; yes];
        v.extend(vec![Answer::Sometimes; sometimes]);
        v.extend(vec![Answer::No; no]);
        v
    }

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(Severity::from_score(70), Severity::Severe);
        assert_eq!(Severity::from_score(69), Severity::Moderate);
        assert_eq!(Severity::from_score(40), Severity::Moderate);
        assert_eq!(Severity::from_score(39), Severity::Mild);
        assert_eq!(Severity::from_score(0), Severity::Mild);
        assert_eq!(Severity::from_score(100), Severity::Severe);
    }

    #[test]
    fn test_dengue_example_scores_severe() {
        // 8 yes + 2 sometimes over 10 -> round(90) -> severe.
        let a = Assessment::from_answers(Disease::Dengue, &answers(8, 2, 0));
        assert_eq!(a.risk_score, 90);
        assert_eq!(a.severity, Severity::Severe);
        assert_eq!(
            a.recommendations(),
            recommendations(Disease::Dengue, Severity::Severe)
        );
        assert_eq!(a.yes_count, 8);
        assert_eq!(a.sometimes_count, 2);
        assert_eq!(a.total_questions, 10);
    }

    #[test]
    fn test_eyes_example_scores_mild() {
        let a = Assessment::from_answers(Disease::Eyes, &answers(2, 0, 8));
        assert_eq!(a.risk_score, 20);
        assert_eq!(a.severity, Severity::Mild);
        assert_eq!(
            a.recommendations(),
            recommendations(Disease::Eyes, Severity::Mild)
        );
    }

    #[test]
    fn test_score_monotonic_in_yes_count() {
        // Holding sometimes fixed, more affirmative answers never lower the score.
        let n = 10;
        let sometimes = 2;
        let mut prev = 0;
        for yes in 0..=(n - sometimes) {
            let a = Assessment::from_answers(
                Disease::Skin,
                &answers(yes, sometimes, n - sometimes - yes),
            );
            assert!(a.risk_score >= prev, "score dropped at yes={yes}");
            prev = a.risk_score;
        }
    }

    #[test]
    fn test_empty_answers_score_zero() {
        let a = Assessment::from_answers(Disease::Eyes, &[]);
        assert_eq!(a.risk_score, 0);
        assert_eq!(a.severity, Severity::Mild);
    }

    #[test]
    fn test_rounding_half_up() {
        // 1 sometimes over 8 answers -> 6.25 -> rounds to 6.
        let a = Assessment::from_answers(Disease::Skin, &answers(0, 1, 7));
        assert_eq!(a.risk_score, 6);
        // 3 yes + 1 sometimes over 8 -> 43.75 -> rounds to 44.
        let a = Assessment::from_answers(Disease::Skin, &answers(3, 1, 4));
        assert_eq!(a.risk_score, 44);
    }
}
