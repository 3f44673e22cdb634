//! End-to-end wizard flow over the application services: every step's write,
//! the routing gates between them, and the final scoring, with simulated
//! devices and an in-memory store.

use std::sync::Arc;
use std::time::{Duration, Instant};

use mediscan::adapters::detect::LumaDetector;
use mediscan::adapters::device::{SimCamera, SimMicrophone};
use mediscan::adapters::sqlite::SqliteStore;
use mediscan::application::{
    after_patient_photo, keys, AutoCapture, CaptureController, EngineEvent, GuideStatus,
    IntakeSession, QuestionnaireEngine, RecordingController, Route, ADVANCE_DELAY, COUNTDOWN,
};
use mediscan::domain::{AgeBracket, Answer, Assessment, Disease, Gender, Language, PhoneNumber};
use mediscan::i18n;
use mediscan::ports::SessionStore;

fn session() -> (Arc<SqliteStore>, IntakeSession<SqliteStore>) {
    let store = Arc::new(SqliteStore::in_memory().expect("Should create db"));
    (Arc::clone(&store), IntakeSession::new(store))
}

/// Answer every question with the given sequence and drive the engine to its
/// finalized bundle.
fn run_questionnaire(disease: Disease, answers: &[Answer]) -> mediscan::domain::ResponseBundle {
    let mut engine = QuestionnaireEngine::new(disease, answers.len());
    let mut now = Instant::now();

    for answer in answers {
        engine.record(*answer, now);
        now += ADVANCE_DELAY + Duration::from_millis(1);
        match engine.tick(now) {
            Some(EngineEvent::Advanced { .. }) => {}
            Some(EngineEvent::Finalized(bundle)) => return bundle,
            None => panic!("engine did not advance"),
        }
    }
    panic!("engine never finalized");
}

#[test]
fn minor_flow_skips_identity_capture() {
    let (_, session) = session();

    // Language, age, gender.
    session.set_language(Language::Urdu).expect("set");
    session.set_age_bracket(AgeBracket::Under18).expect("set");
    session.set_gender(Gender::Female).expect("set");

    // Guided photo: auto-capture fires after the countdown on a centered face.
    let mut controller = CaptureController::new(SimCamera::centered());
    controller.open();
    let mut auto = AutoCapture::new(Some(LumaDetector::new()));
    let t0 = Instant::now();
    let frame = controller.preview().expect("Should preview");
    assert!(matches!(
        auto.sample(&frame, t0),
        GuideStatus::Aligned { .. }
    ));
    assert_eq!(
        auto.sample(&frame, t0 + COUNTDOWN + Duration::from_millis(1)),
        GuideStatus::Trigger
    );
    controller.capture();
    let photo = controller.confirm().expect("Should confirm");
    session
        .save_artifact(keys::PATIENT_PHOTO, &photo)
        .expect("save");

    // The age gate routes a minor straight to phone entry.
    let next = after_patient_photo(session.age_bracket().expect("get"));
    assert_eq!(next, Route::PhoneNumber);
    assert!(!session.has_artifact(keys::CNIC_PHOTO).expect("check"));

    // Phone entry.
    let phone = PhoneNumber::parse("03001234567").expect("valid");
    session.set_phone(&phone).expect("set");
    assert_eq!(
        session.phone().expect("get").expect("present").as_str(),
        "+92 - 3001234567"
    );

    // Disease selection and single-image capture.
    session.set_disease(Disease::Eyes).expect("set");
    let mut eye_controller = CaptureController::new(SimCamera::centered());
    eye_controller.open();
    eye_controller.capture();
    let eye_photo = eye_controller.confirm().expect("Should confirm");
    session
        .save_artifact(Disease::Eyes.media_keys()[0], &eye_photo)
        .expect("save");

    // Questionnaire: 2 yes, 8 no -> mild.
    let mut answers = vec![Answer::Yes; 2];
    answers.extend(vec![Answer::No; 8]);
    let bundle = run_questionnaire(Disease::Eyes, &answers);
    session.save_response_bundle(&bundle).expect("save");

    // Results recompute from the stored bundle.
    let stored = session.response_bundle().expect("get").expect("present");
    let assessment = Assessment::from_bundle(&stored);
    assert_eq!(assessment.risk_score, 20);
    assert_eq!(assessment.severity, mediscan::Severity::Mild);
    assert_eq!(
        assessment.recommendations(),
        mediscan::domain::recommendations(Disease::Eyes, mediscan::Severity::Mild)
    );

    // Back-to-start clears only the bundle.
    session.clear_answers().expect("clear");
    assert!(session.response_bundle().expect("get").is_none());
    assert_eq!(session.language().expect("get"), Some(Language::Urdu));
    assert!(session.has_artifact(keys::PATIENT_PHOTO).expect("check"));
}

#[test]
fn adult_flow_passes_through_identity_capture() {
    let (_, session) = session();
    session.set_age_bracket(AgeBracket::Above18).expect("set");

    let next = after_patient_photo(session.age_bracket().expect("get"));
    assert_eq!(next, Route::CnicCapture);

    let mut controller = CaptureController::new(SimCamera::centered());
    controller.open();
    controller.capture();
    let document = controller.confirm().expect("Should confirm");
    session
        .save_artifact(keys::CNIC_PHOTO, &document)
        .expect("save");
    assert!(session.has_artifact(keys::CNIC_PHOTO).expect("check"));
}

#[test]
fn breathing_flow_requires_both_artifacts() {
    let (_, session) = session();
    session.set_disease(Disease::Breathing).expect("set");

    // X-ray capture first.
    let mut camera = CaptureController::new(SimCamera::centered());
    camera.open();
    camera.capture();
    let xray = camera.confirm().expect("Should confirm");

    // Audio sub-flow second; advance is gated on both being present.
    let mut recorder = RecordingController::new(SimMicrophone::new());
    recorder.start();
    assert!(!recorder.has_artifact(), "no clip while still recording");
    recorder.stop();
    let audio = recorder.take_artifact().expect("Should hold clip");

    let media_keys = Disease::Breathing.media_keys();
    session.save_artifact(media_keys[0], &xray).expect("save");
    session.save_artifact(media_keys[1], &audio).expect("save");
    assert!(session.has_artifact("breathingXray").expect("check"));
    assert!(session.has_artifact("breathingAudio").expect("check"));
}

#[test]
fn unknown_disease_capture_route_redirects_without_media() {
    let (store, session) = session();

    let route = Route::parse("/disease-capture/malaria");
    assert_eq!(route, Route::DiseaseSelection);

    // The redirect persisted nothing.
    for disease in Disease::ALL {
        for key in disease.media_keys() {
            assert!(!session.has_artifact(key).expect("check"));
        }
    }
    assert_eq!(store.get(keys::DISEASE).expect("get"), None);
}

#[test]
fn unknown_path_redirects_to_language_screen() {
    assert_eq!(Route::parse("/totally/unknown"), Route::Language);
    assert_eq!(Route::parse(""), Route::Language);
}

#[test]
fn dengue_run_scores_severe_with_expected_recommendations() {
    let mut answers = vec![Answer::Yes; 8];
    answers.extend(vec![Answer::Sometimes; 2]);
    let bundle = run_questionnaire(Disease::Dengue, &answers);

    assert_eq!(bundle.answers.len(), 10);

    let assessment = Assessment::from_bundle(&bundle);
    assert_eq!(assessment.risk_score, 90);
    assert_eq!(assessment.severity, mediscan::Severity::Severe);
    assert_eq!(
        assessment.recommendations(),
        mediscan::domain::recommendations(Disease::Dengue, mediscan::Severity::Severe)
    );
}

#[test]
fn questionnaire_records_one_answer_per_question_with_timestamp() {
    let total = i18n::questions(Disease::Skin, Language::Sindhi).len();
    let answers = vec![Answer::Sometimes; total];
    let bundle = run_questionnaire(Disease::Skin, &answers);

    assert_eq!(bundle.answers.len(), total);
    assert_eq!(bundle.disease, Disease::Skin);

    // The persisted timestamp is RFC 3339 / ISO 8601.
    let json = serde_json::to_string(&bundle).expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    let ts = value["timestamp"].as_str().expect("timestamp string");
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "bad timestamp {ts}");
}

#[test]
fn reruns_overwrite_prior_values_at_same_keys() {
    let (_, session) = session();

    session.set_disease(Disease::Eyes).expect("set");
    session.set_disease(Disease::Dengue).expect("set");
    assert_eq!(session.disease().expect("get"), Some(Disease::Dengue));

    let first = mediscan::domain::MediaArtifact::image("image/x-portable-graymap", vec![1]);
    let second = mediscan::domain::MediaArtifact::image("image/x-portable-graymap", vec![2, 3]);
    session.save_artifact(keys::PATIENT_PHOTO, &first).expect("save");
    session.save_artifact(keys::PATIENT_PHOTO, &second).expect("save");
}
