//! Questionnaire engine: one answer per index, delayed auto-advance,
//! finalization into a persisted bundle.

use std::time::{Duration, Instant};

use crate::domain::{Answer, AnswerSheet, Disease, ResponseBundle};

/// Pause between accepting an answer and moving on, long enough for the
/// selection highlight to register.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(500);

/// What a tick produced.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// Moved to the next question.
    Advanced { index: usize },
    /// Last answer recorded; the bundle is ready to persist.
    Finalized(ResponseBundle),
}

/// Drives one questionnaire run. No backward navigation; the only way an
/// answer changes is re-answering the current index before the delayed
/// advance fires, which overwrites and restarts the delay.
pub struct QuestionnaireEngine {
    disease: Disease,
    index: usize,
    sheet: AnswerSheet,
    deadline: Option<Instant>,
}

impl QuestionnaireEngine {
    /// # Panics
    /// Panics if `total` is zero; every disease ships a fixed non-empty list.
    #[must_use]
    pub fn new(disease: Disease, total: usize) -> Self {
        assert!(total > 0, "questionnaire needs at least one question");
        Self {
            disease,
            index: 0,
            sheet: AnswerSheet::new(total),
            deadline: None,
        }
    }

    #[must_use]
    pub fn disease(&self) -> Disease {
        self.disease
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.sheet.len()
    }

    /// The answer currently recorded at the cursor, if any.
    #[must_use]
    pub fn current_answer(&self) -> Option<Answer> {
        self.sheet.answer_at(self.index)
    }

    /// Whether a delayed advance is pending.
    #[must_use]
    pub fn advancing(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fraction of questions passed, for the progress bar.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.sheet.len() as f64
    }

    /// Record an answer at the current index and (re)start the advance
    /// delay. Re-answering before the advance fires overwrites.
    pub fn record(&mut self, answer: Answer, now: Instant) {
        self.sheet.record(self.index, answer);
        self.deadline = Some(now + ADVANCE_DELAY);
    }

    /// Drive pending work. Returns an event when the delayed advance fires.
    pub fn tick(&mut self, now: Instant) -> Option<EngineEvent> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;

        if self.index + 1 < self.sheet.len() {
            self.index += 1;
            Some(EngineEvent::Advanced { index: self.index })
        } else {
            let answers = self
                .sheet
                .recorded()
                .expect("sheet is complete at finalization");
            Some(EngineEvent::Finalized(ResponseBundle::new(
                self.disease,
                answers,
            )))
        }
    }

    /// Cancel the pending advance (screen teardown).
    pub fn cancel_pending(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn past(deadline: Instant) -> Instant {
        deadline + ADVANCE_DELAY + Duration::from_millis(1)
    }

    #[test]
    fn test_records_then_advances_after_delay() {
        let mut engine = QuestionnaireEngine::new(Disease::Eyes, 3);
        let t0 = Instant::now();

        engine.record(Answer::Yes, t0);
        assert!(engine.advancing());
        assert_eq!(engine.current_answer(), Some(Answer::Yes));

        // Before the delay nothing moves.
        assert!(engine.tick(t0 + Duration::from_millis(100)).is_none());
        assert_eq!(engine.index(), 0);

        // After the delay the cursor advances once.
        match engine.tick(past(t0)) {
            Some(EngineEvent::Advanced { index }) => assert_eq!(index, 1),
            other => panic!("expected advance, got {other:?}"),
        }
        assert!(!engine.advancing());
        assert!(engine.tick(past(t0)).is_none(), "no stale second fire");
    }

    #[test]
    fn test_reanswer_before_advance_overwrites() {
        let mut engine = QuestionnaireEngine::new(Disease::Skin, 2);
        let t0 = Instant::now();

        engine.record(Answer::Yes, t0);
        let t1 = t0 + Duration::from_millis(200);
        engine.record(Answer::No, t1);

        // The first deadline has passed but was superseded by the re-answer.
        assert!(engine.tick(t0 + ADVANCE_DELAY).is_none());

        match engine.tick(past(t1)) {
            Some(EngineEvent::Advanced { index }) => assert_eq!(index, 1),
            other => panic!("expected advance, got {other:?}"),
        }
        assert_eq!(engine.sheet.answer_at(0), Some(Answer::No));
    }

    #[test]
    fn test_final_answer_finalizes_with_full_sheet() {
        let total = 4;
        let mut engine = QuestionnaireEngine::new(Disease::Dengue, total);
        let mut now = Instant::now();

        for i in 0..total {
            engine.record(Answer::Sometimes, now);
            now = past(now);
            match engine.tick(now) {
                Some(EngineEvent::Advanced { index }) => {
                    assert_eq!(index, i + 1);
                    assert!(i + 1 < total);
                }
                Some(EngineEvent::Finalized(bundle)) => {
                    assert_eq!(i, total - 1, "finalizes only on the last index");
                    assert_eq!(bundle.disease, Disease::Dengue);
                    assert_eq!(bundle.answers.len(), total);
                    assert!(bundle.answers.iter().all(|a| *a == Answer::Sometimes));
                    // RFC 3339 timestamp survives a serde roundtrip.
                    let json = serde_json::to_string(&bundle).expect("serialize");
                    assert!(serde_json::from_str::<ResponseBundle>(&json).is_ok());
                    return;
                }
                None => panic!("expected an event at step {i}"),
            }
        }
        panic!("never finalized");
    }

    #[test]
    fn test_cancel_pending_stops_advance() {
        let mut engine = QuestionnaireEngine::new(Disease::Breathing, 2);
        let t0 = Instant::now();
        engine.record(Answer::Yes, t0);
        engine.cancel_pending();
        assert!(engine.tick(past(t0)).is_none());
        // The recorded answer survives cancellation.
        assert_eq!(engine.current_answer(), Some(Answer::Yes));
    }

    #[test]
    fn test_progress_fraction() {
        let engine = QuestionnaireEngine::new(Disease::Eyes, 10);
        assert!((engine.progress() - 0.1).abs() < 1e-9);
    }
}
