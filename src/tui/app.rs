//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation along the wizard flow
//! - Input event handling
//! - Deadline-based timers (choice confirmation, auto-advance, countdown)
//! - Device lifecycle via the acquisition worker

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::Line,
    Terminal,
};

use crate::adapters::detect::LumaDetector;
use crate::adapters::device::{SimCamera, SimMicrophone, SpoolCamera, SpoolMicrophone};
use crate::adapters::sqlite::SqliteStore;
use crate::application::{
    after_patient_photo, export_report, keys, AutoCapture, CaptureController, CapturePhase,
    EngineEvent, GuideStatus, IntakeSession, QuestionnaireEngine, RecordingController,
    RecordingPhase, Route,
};
use crate::domain::{
    AgeBracket, Assessment, Disease, Frame as CameraFrame, Gender, Language, MediaArtifact,
    PhoneNumber, ResponseBundle,
};
use crate::i18n::{self, Msg};
use crate::ports::{Camera, CaptureError, FaceDetector, Microphone};

use super::ui::{
    capture::{render_capture, render_recording, CaptureView, RecordingView},
    choice::{render_choice, ChoiceState},
    phone::{render_phone, PhoneState},
    questionnaire::{render_questionnaire, ANSWER_KEYS},
    render_disclaimer, render_footer, render_screen_header,
    results::render_results,
};
use super::worker::{AcquireOutcome, AcquireWorker, AcquireWorkerHandle};

/// Runtime configuration, environment-sourced.
struct AppConfig {
    db_path: String,
    capture_dir: PathBuf,
    export_dir: PathBuf,
    sim_camera: bool,
    sim_microphone: bool,
}

impl AppConfig {
    fn from_env() -> Self {
        let db_path =
            std::env::var("MEDISCAN_DB_PATH").unwrap_or_else(|_| "mediscan.db".to_string());
        let capture_dir =
            std::env::var("MEDISCAN_CAPTURE_DIR").unwrap_or_else(|_| "capture".to_string());
        let export_dir = std::env::var("MEDISCAN_EXPORT_DIR").unwrap_or_else(|_| ".".to_string());
        let sim_camera = std::env::var("MEDISCAN_CAMERA").as_deref() == Ok("sim");
        let sim_microphone = std::env::var("MEDISCAN_MIC").as_deref() == Ok("sim");

        Self {
            db_path,
            capture_dir: PathBuf::from(capture_dir),
            export_dir: PathBuf::from(export_dir),
            sim_camera,
            sim_microphone,
        }
    }
}

/// One camera-backed capture step: acquisition worker, controller, optional
/// auto-capture guidance and the last preview frame.
struct CaptureScreen {
    pending: Option<AcquireWorkerHandle>,
    controller: Option<CaptureController<Box<dyn Camera>>>,
    auto: Option<AutoCapture<Box<dyn FaceDetector>>>,
    guide: Option<GuideStatus>,
    preview: Option<CameraFrame>,
}

impl CaptureScreen {
    fn start(
        camera: Box<dyn Camera>,
        auto: Option<AutoCapture<Box<dyn FaceDetector>>>,
    ) -> Self {
        Self {
            pending: Some(AcquireWorker::spawn(camera)),
            guide: auto.as_ref().map(|_| GuideStatus::Searching),
            auto,
            controller: None,
            preview: None,
        }
    }

    fn phase(&self) -> CapturePhase {
        if self.pending.is_some() {
            return CapturePhase::Acquiring;
        }
        self.controller
            .as_ref()
            .map_or(CapturePhase::Acquiring, |c| c.phase().clone())
    }

    /// Poll the worker and, once live, read a preview frame and feed the
    /// auto-capture sampler. A fired countdown triggers the capture here.
    fn tick(&mut self, now: Instant) {
        if let Some(handle) = &self.pending {
            if let Some(outcome) = handle.try_recv() {
                self.pending = None;
                self.controller = Some(match outcome {
                    AcquireOutcome::Ready(camera) => CaptureController::from_open(camera),
                    AcquireOutcome::Failed(camera, error) => {
                        CaptureController::from_failed(camera, error)
                    }
                });
            }
        }

        let Some(controller) = &mut self.controller else {
            return;
        };
        if *controller.phase() != CapturePhase::Live {
            return;
        }
        let Some(frame) = controller.preview() else {
            return;
        };

        if let Some(auto) = &mut self.auto {
            let status = auto.sample(&frame, now);
            self.guide = Some(status);
            if status == GuideStatus::Trigger {
                controller.capture();
                auto.cancel();
            }
        }
        self.preview = Some(frame);
    }

    fn capture(&mut self) {
        if let Some(auto) = &mut self.auto {
            auto.cancel();
        }
        if let Some(controller) = &mut self.controller {
            controller.capture();
        }
    }

    fn retake(&mut self) {
        if let Some(controller) = &mut self.controller {
            controller.retake();
        }
    }

    fn retry(&mut self) {
        if let Some(controller) = &mut self.controller {
            controller.retry();
        }
    }

    fn confirm(&mut self) -> Option<MediaArtifact> {
        self.controller.as_mut().and_then(|c| c.confirm())
    }
}

/// The breathing screen's two sub-flows in sequence.
enum BreathingStep {
    Xray,
    Audio,
}

struct BreathingScreen {
    camera: CaptureScreen,
    xray: Option<MediaArtifact>,
    recorder: RecordingController<Box<dyn Microphone>>,
    step: BreathingStep,
}

struct ResultsScreen {
    assessment: Option<Assessment>,
    export_notice: Option<String>,
}

/// Current screen plus its state.
enum Screen {
    Language(ChoiceState),
    Age(ChoiceState),
    Gender(ChoiceState),
    PatientPhoto(CaptureScreen),
    Cnic(CaptureScreen),
    Phone(PhoneState),
    DiseaseSelect(ChoiceState),
    DiseaseCapture(Disease, CaptureScreen),
    Breathing(BreathingScreen),
    Questionnaire(Disease, QuestionnaireEngine),
    Results(ResultsScreen),
}

/// A deferred state change: session writes and navigation happen here so key
/// handling and ticking never fight the borrow on the active screen.
enum Transition {
    PersistLanguage(usize),
    PersistAge(usize),
    PersistGender(usize),
    PersistDisease(usize),
    SavePatientPhoto(MediaArtifact),
    SaveCnic(MediaArtifact),
    SavePhone(PhoneNumber),
    SaveSingleCapture(Disease, MediaArtifact),
    SaveBreathing(MediaArtifact, MediaArtifact),
    SaveBundle(ResponseBundle),
    ExportReport,
    GoHome,
    Navigate(Route),
}

/// Main application state
pub struct App {
    session: IntakeSession<SqliteStore>,
    config: AppConfig,
    lang: Language,
    screen: Screen,
    should_quit: bool,
}

impl App {
    /// Create a new application instance using default adapters.
    ///
    /// # Errors
    /// Returns error if the session store cannot be opened.
    pub fn new() -> Result<Self> {
        let config = AppConfig::from_env();
        let store = Arc::new(
            SqliteStore::new(&config.db_path)
                .with_context(|| format!("opening session store at {}", config.db_path))?,
        );
        Ok(Self::with_store(store, config))
    }

    fn with_store(store: Arc<SqliteStore>, config: AppConfig) -> Self {
        let session = IntakeSession::new(store);
        // The persisted language survives restarts.
        let lang = session.language().ok().flatten().unwrap_or_default();

        let mut app = Self {
            session,
            config,
            lang,
            screen: Screen::Language(ChoiceState::new(vec![])),
            should_quit: false,
        };
        app.goto(Route::Language);
        app
    }

    fn make_camera(&self) -> Box<dyn Camera> {
        if self.config.sim_camera {
            Box::new(SimCamera::centered())
        } else {
            Box::new(SpoolCamera::new(&self.config.capture_dir))
        }
    }

    fn make_microphone(&self) -> Box<dyn Microphone> {
        if self.config.sim_microphone {
            Box::new(SimMicrophone::new())
        } else {
            Box::new(SpoolMicrophone::new(&self.config.capture_dir))
        }
    }

    fn make_detector(&self) -> Option<Box<dyn FaceDetector>> {
        Some(Box::new(LumaDetector::new()))
    }

    /// Replace the active screen. Dropping the old state releases its
    /// devices and cancels its timers.
    fn goto(&mut self, route: Route) {
        tracing::debug!(path = %route.path(), "navigating");
        let lang = self.lang;

        self.screen = match route {
            Route::Language => Screen::Language(ChoiceState::new(
                Language::ALL
                    .iter()
                    .map(|l| l.native_name().to_string())
                    .collect(),
            )),
            Route::AgeVerification => Screen::Age(ChoiceState::new(vec![
                i18n::text(lang, Msg::AgeUnder18).to_string(),
                i18n::text(lang, Msg::AgeAbove18).to_string(),
            ])),
            Route::GenderSelection => Screen::Gender(ChoiceState::new(vec![
                i18n::text(lang, Msg::GenderMale).to_string(),
                i18n::text(lang, Msg::GenderFemale).to_string(),
                i18n::text(lang, Msg::GenderOther).to_string(),
                i18n::text(lang, Msg::GenderPreferNotToSay).to_string(),
            ])),
            Route::CameraCapture => Screen::PatientPhoto(CaptureScreen::start(
                self.make_camera(),
                Some(AutoCapture::new(self.make_detector())),
            )),
            Route::CnicCapture => Screen::Cnic(CaptureScreen::start(self.make_camera(), None)),
            Route::PhoneNumber => Screen::Phone(PhoneState::new()),
            Route::DiseaseSelection => Screen::DiseaseSelect(ChoiceState::new(vec![
                i18n::text(lang, Msg::DiseaseEyes).to_string(),
                i18n::text(lang, Msg::DiseaseBreathing).to_string(),
                i18n::text(lang, Msg::DiseaseSkin).to_string(),
                i18n::text(lang, Msg::DiseaseDengue).to_string(),
            ])),
            Route::DiseaseCapture(Disease::Breathing) => Screen::Breathing(BreathingScreen {
                camera: CaptureScreen::start(self.make_camera(), None),
                xray: None,
                recorder: RecordingController::new(self.make_microphone()),
                step: BreathingStep::Xray,
            }),
            Route::DiseaseCapture(disease) => {
                Screen::DiseaseCapture(disease, CaptureScreen::start(self.make_camera(), None))
            }
            Route::Questionnaire(disease) => {
                let total = i18n::questions(disease, lang).len();
                Screen::Questionnaire(disease, QuestionnaireEngine::new(disease, total))
            }
            Route::Results => {
                let assessment = self
                    .session
                    .response_bundle()
                    .ok()
                    .flatten()
                    .map(|bundle| Assessment::from_bundle(&bundle));
                Screen::Results(ResultsScreen {
                    assessment,
                    export_notice: None,
                })
            }
        };
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            let now = Instant::now();
            if let Some(transition) = self.tick(now) {
                self.apply(transition);
            }

            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(2),
                        Constraint::Min(0),
                        Constraint::Length(2),
                        Constraint::Length(2),
                    ])
                    .split(area);

                render_screen_header(f, chunks[0], &self.route_label(), &self.current_path());
                self.render_content(f, chunks[1]);
                render_footer(f, chunks[2], self.footer_hints());
                render_disclaimer(f, chunks[3]);
            })?;

            // Short poll to stay responsive to timers.
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(transition) =
                            self.handle_key(key.code, key.modifiers, Instant::now())
                        {
                            self.apply(transition);
                        }
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Drive timers and background work for the active screen.
    fn tick(&mut self, now: Instant) -> Option<Transition> {
        match &mut self.screen {
            Screen::Language(state) => state
                .confirmed(now)
                .map(|_| Transition::Navigate(Route::AgeVerification)),
            Screen::Age(state) => state
                .confirmed(now)
                .map(|_| Transition::Navigate(Route::GenderSelection)),
            Screen::Gender(state) => state
                .confirmed(now)
                .map(|_| Transition::Navigate(Route::CameraCapture)),
            Screen::DiseaseSelect(state) => state
                .confirmed(now)
                .map(|idx| Transition::Navigate(Route::DiseaseCapture(Disease::ALL[idx]))),
            Screen::PatientPhoto(capture) | Screen::Cnic(capture) => {
                capture.tick(now);
                None
            }
            Screen::DiseaseCapture(_, capture) => {
                capture.tick(now);
                None
            }
            Screen::Breathing(breathing) => {
                if matches!(breathing.step, BreathingStep::Xray) {
                    breathing.camera.tick(now);
                }
                None
            }
            Screen::Questionnaire(_, engine) => match engine.tick(now) {
                Some(EngineEvent::Finalized(bundle)) => Some(Transition::SaveBundle(bundle)),
                Some(EngineEvent::Advanced { .. }) | None => None,
            },
            Screen::Phone(_) | Screen::Results(_) => None,
        }
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        modifiers: KeyModifiers,
        now: Instant,
    ) -> Option<Transition> {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        match &mut self.screen {
            Screen::Language(state) => {
                Self::handle_choice_key(state, key, now).map(Transition::PersistLanguage)
            }
            Screen::Age(state) => {
                Self::handle_choice_key(state, key, now).map(Transition::PersistAge)
            }
            Screen::Gender(state) => {
                Self::handle_choice_key(state, key, now).map(Transition::PersistGender)
            }
            Screen::DiseaseSelect(state) => {
                Self::handle_choice_key(state, key, now).map(Transition::PersistDisease)
            }
            Screen::PatientPhoto(capture) => {
                Self::handle_capture_key(capture, key).map(Transition::SavePatientPhoto)
            }
            Screen::Cnic(capture) => {
                Self::handle_capture_key(capture, key).map(Transition::SaveCnic)
            }
            Screen::DiseaseCapture(disease, capture) => {
                let disease = *disease;
                Self::handle_capture_key(capture, key)
                    .map(|artifact| Transition::SaveSingleCapture(disease, artifact))
            }
            Screen::Breathing(breathing) => Self::handle_breathing_key(breathing, key),
            Screen::Phone(state) => match key {
                KeyCode::Char(c) => {
                    state.input_char(c);
                    None
                }
                KeyCode::Backspace => {
                    state.backspace();
                    None
                }
                KeyCode::Enter => match state.submit() {
                    Some(phone) => Some(Transition::SavePhone(phone)),
                    None => {
                        state.error = Some(i18n::text(self.lang, Msg::PhoneInvalid));
                        None
                    }
                },
                _ => None,
            },
            Screen::Questionnaire(_, engine) => {
                if let KeyCode::Char(c) = key {
                    for (answer_key, answer, _) in ANSWER_KEYS {
                        if c == answer_key {
                            engine.record(answer, now);
                            break;
                        }
                    }
                }
                None
            }
            Screen::Results(_) => match key {
                KeyCode::Char('d') | KeyCode::Char('D') => Some(Transition::ExportReport),
                KeyCode::Enter | KeyCode::Char('h') | KeyCode::Char('H') => {
                    Some(Transition::GoHome)
                }
                _ => None,
            },
        }
    }

    /// Shared key handling for the fixed-choice screens. Returns the chosen
    /// index once the user locks it in.
    fn handle_choice_key(state: &mut ChoiceState, key: KeyCode, now: Instant) -> Option<usize> {
        match key {
            KeyCode::Up => {
                state.prev();
                None
            }
            KeyCode::Down | KeyCode::Tab => {
                state.next();
                None
            }
            KeyCode::Enter => Some(state.choose(now)),
            KeyCode::Char(c) => {
                let idx = c.to_digit(10)? as usize;
                if (1..=state.options.len()).contains(&idx) && state.chosen.is_none() {
                    state.cursor = idx - 1;
                    Some(state.choose(now))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Shared key handling for single-artifact capture screens. Returns the
    /// artifact when the user confirms it.
    fn handle_capture_key(capture: &mut CaptureScreen, key: KeyCode) -> Option<MediaArtifact> {
        match key {
            KeyCode::Char(' ') => {
                capture.capture();
                None
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                match capture.phase() {
                    CapturePhase::Captured => capture.retake(),
                    CapturePhase::Failed(_) => capture.retry(),
                    _ => {}
                }
                None
            }
            KeyCode::Enter => capture.confirm(),
            _ => None,
        }
    }

    fn handle_breathing_key(
        breathing: &mut BreathingScreen,
        key: KeyCode,
    ) -> Option<Transition> {
        match breathing.step {
            BreathingStep::Xray => {
                if key == KeyCode::Enter {
                    if let Some(artifact) = breathing.camera.confirm() {
                        breathing.xray = Some(artifact);
                        breathing.step = BreathingStep::Audio;
                    }
                    return None;
                }
                Self::handle_capture_key(&mut breathing.camera, key);
                None
            }
            BreathingStep::Audio => match key {
                KeyCode::Char(' ') => {
                    if *breathing.recorder.phase() == RecordingPhase::Recording {
                        breathing.recorder.stop();
                    } else {
                        breathing.recorder.start();
                    }
                    None
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    breathing.recorder.retake();
                    None
                }
                KeyCode::Enter => {
                    // Both artifacts must be present before advance.
                    if breathing.xray.is_some() && breathing.recorder.has_artifact() {
                        let xray = breathing.xray.take()?;
                        let audio = breathing.recorder.take_artifact()?;
                        Some(Transition::SaveBreathing(xray, audio))
                    } else {
                        None
                    }
                }
                _ => None,
            },
        }
    }

    /// Session writes and navigation for a deferred transition.
    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::PersistLanguage(idx) => {
                let lang = Language::ALL[idx];
                if let Err(e) = self.session.set_language(lang) {
                    tracing::warn!(error = %e, "failed to persist language");
                }
                self.lang = lang;
            }
            Transition::PersistAge(idx) => {
                if let Err(e) = self.session.set_age_bracket(AgeBracket::ALL[idx]) {
                    tracing::warn!(error = %e, "failed to persist age bracket");
                }
            }
            Transition::PersistGender(idx) => {
                if let Err(e) = self.session.set_gender(Gender::ALL[idx]) {
                    tracing::warn!(error = %e, "failed to persist gender");
                }
            }
            Transition::PersistDisease(idx) => {
                if let Err(e) = self.session.set_disease(Disease::ALL[idx]) {
                    tracing::warn!(error = %e, "failed to persist disease");
                }
            }
            Transition::SavePatientPhoto(artifact) => {
                if let Err(e) = self.session.save_artifact(keys::PATIENT_PHOTO, &artifact) {
                    tracing::warn!(error = %e, "failed to save patient photo");
                }
                let age = self.session.age_bracket().ok().flatten();
                self.goto(after_patient_photo(age));
            }
            Transition::SaveCnic(artifact) => {
                if let Err(e) = self.session.save_artifact(keys::CNIC_PHOTO, &artifact) {
                    tracing::warn!(error = %e, "failed to save identity document");
                }
                self.goto(Route::PhoneNumber);
            }
            Transition::SavePhone(phone) => {
                if let Err(e) = self.session.set_phone(&phone) {
                    tracing::warn!(error = %e, "failed to save phone number");
                }
                self.goto(Route::DiseaseSelection);
            }
            Transition::SaveSingleCapture(disease, artifact) => {
                if let Err(e) = self.session.save_artifact(disease.media_keys()[0], &artifact) {
                    tracing::warn!(error = %e, "failed to save capture");
                }
                self.goto(Route::Questionnaire(disease));
            }
            Transition::SaveBreathing(xray, audio) => {
                let media_keys = Disease::Breathing.media_keys();
                let (xray_key, audio_key) = (media_keys[0], media_keys[1]);
                if let Err(e) = self.session.save_artifact(xray_key, &xray) {
                    tracing::warn!(error = %e, "failed to save X-ray");
                }
                if let Err(e) = self.session.save_artifact(audio_key, &audio) {
                    tracing::warn!(error = %e, "failed to save recording");
                }
                self.goto(Route::Questionnaire(Disease::Breathing));
            }
            Transition::SaveBundle(bundle) => {
                if let Err(e) = self.session.save_response_bundle(&bundle) {
                    tracing::warn!(error = %e, "failed to save questionnaire bundle");
                }
                self.goto(Route::Results);
            }
            Transition::ExportReport => {
                if let Screen::Results(results) = &mut self.screen {
                    if let Some(assessment) = &results.assessment {
                        match export_report(&self.config.export_dir, assessment, self.lang) {
                            Ok(path) => {
                                results.export_notice =
                                    Some(format!("Saved to {}", path.display()));
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "report export failed");
                                results.export_notice = Some("Export failed".to_string());
                            }
                        }
                    }
                }
            }
            Transition::GoHome => {
                if let Err(e) = self.session.clear_answers() {
                    tracing::warn!(error = %e, "failed to clear questionnaire answers");
                }
                self.goto(Route::Language);
            }
            Transition::Navigate(route) => self.goto(route),
        }
    }

    fn current_path(&self) -> String {
        let route = match &self.screen {
            Screen::Language(_) => Route::Language,
            Screen::Age(_) => Route::AgeVerification,
            Screen::Gender(_) => Route::GenderSelection,
            Screen::PatientPhoto(_) => Route::CameraCapture,
            Screen::Cnic(_) => Route::CnicCapture,
            Screen::Phone(_) => Route::PhoneNumber,
            Screen::DiseaseSelect(_) => Route::DiseaseSelection,
            Screen::DiseaseCapture(d, _) => Route::DiseaseCapture(*d),
            Screen::Breathing(_) => Route::DiseaseCapture(Disease::Breathing),
            Screen::Questionnaire(d, _) => Route::Questionnaire(*d),
            Screen::Results(_) => Route::Results,
        };
        route.path()
    }

    fn route_label(&self) -> String {
        let msg = match &self.screen {
            Screen::Language(_) => Msg::LanguageTitle,
            Screen::Age(_) => Msg::AgeTitle,
            Screen::Gender(_) => Msg::GenderTitle,
            Screen::PatientPhoto(_) => Msg::CameraTitle,
            Screen::Cnic(_) => Msg::CnicTitle,
            Screen::Phone(_) => Msg::PhoneTitle,
            Screen::DiseaseSelect(_) => Msg::DiseaseTitle,
            Screen::DiseaseCapture(Disease::Eyes, _) => Msg::EyesCaptureTitle,
            Screen::DiseaseCapture(Disease::Skin, _) => Msg::SkinCaptureTitle,
            Screen::DiseaseCapture(_, _) => Msg::DengueCaptureTitle,
            Screen::Breathing(_) => Msg::BreathingTitle,
            Screen::Questionnaire(_, _) => Msg::QuestionnaireTitle,
            Screen::Results(_) => Msg::ResultsTitle,
        };
        i18n::text(self.lang, msg).to_string()
    }

    fn capture_error_text(&self, error: &CaptureError) -> String {
        match error {
            CaptureError::PermissionDenied => {
                i18n::text(self.lang, Msg::CameraPermissionError).to_string()
            }
            CaptureError::NoDevice => i18n::text(self.lang, Msg::CameraNoDevice).to_string(),
            CaptureError::Device(message) => message.clone(),
        }
    }

    fn mic_error_text(&self, error: &CaptureError) -> String {
        match error {
            CaptureError::PermissionDenied | CaptureError::NoDevice => {
                i18n::text(self.lang, Msg::MicError).to_string()
            }
            CaptureError::Device(message) => message.clone(),
        }
    }

    fn render_capture_screen(
        &self,
        f: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
        capture: &CaptureScreen,
        title: Msg,
        instruction: Msg,
        frame_guide: Option<Msg>,
    ) {
        let phase = capture.phase();
        let error_message = match &phase {
            CapturePhase::Failed(e) => Some(self.capture_error_text(e)),
            _ => None,
        };
        let view = CaptureView {
            title: i18n::text(self.lang, title),
            instruction: i18n::text(self.lang, instruction),
            loading: i18n::text(self.lang, Msg::CameraLoading),
            phase: &phase,
            preview: capture.preview.as_ref(),
            guide: capture.guide,
            error_message: error_message.as_deref(),
            frame_guide: frame_guide.map(|m| i18n::text(self.lang, m)),
        };
        render_capture(f, area, &view);
    }

    fn render_content(&self, f: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        let lang = self.lang;
        match &self.screen {
            Screen::Language(state) => render_choice(
                f,
                area,
                i18n::text(lang, Msg::LanguageTitle),
                i18n::text(lang, Msg::LanguageSubtitle),
                state,
            ),
            Screen::Age(state) => render_choice(
                f,
                area,
                i18n::text(lang, Msg::AgeTitle),
                i18n::text(lang, Msg::AgeQuestion),
                state,
            ),
            Screen::Gender(state) => render_choice(
                f,
                area,
                i18n::text(lang, Msg::GenderTitle),
                i18n::text(lang, Msg::GenderQuestion),
                state,
            ),
            Screen::DiseaseSelect(state) => render_choice(
                f,
                area,
                i18n::text(lang, Msg::DiseaseTitle),
                i18n::text(lang, Msg::DiseaseInstruction),
                state,
            ),
            Screen::PatientPhoto(capture) => self.render_capture_screen(
                f,
                area,
                capture,
                Msg::CameraTitle,
                Msg::CameraInstruction,
                None,
            ),
            Screen::Cnic(capture) => self.render_capture_screen(
                f,
                area,
                capture,
                Msg::CnicTitle,
                Msg::CnicInstruction,
                None,
            ),
            Screen::DiseaseCapture(disease, capture) => {
                let (title, instruction, guide) = match disease {
                    Disease::Eyes => (Msg::EyesCaptureTitle, Msg::EyesCaptureInstruction, None),
                    Disease::Skin => (
                        Msg::SkinCaptureTitle,
                        Msg::SkinCaptureInstruction,
                        Some(Msg::SkinFrameGuide),
                    ),
                    _ => (Msg::DengueCaptureTitle, Msg::DengueCaptureInstruction, None),
                };
                self.render_capture_screen(f, area, capture, title, instruction, guide);
            }
            Screen::Breathing(breathing) => match breathing.step {
                BreathingStep::Xray => self.render_capture_screen(
                    f,
                    area,
                    &breathing.camera,
                    Msg::BreathingXrayTitle,
                    Msg::BreathingXrayInstruction,
                    None,
                ),
                BreathingStep::Audio => {
                    let phase = breathing.recorder.phase();
                    let error_message = match phase {
                        RecordingPhase::Failed(e) => Some(self.mic_error_text(e)),
                        _ => None,
                    };
                    let view = RecordingView {
                        title: i18n::text(lang, Msg::BreathingStethTitle),
                        instruction: i18n::text(lang, Msg::BreathingStethInstruction),
                        phase,
                        error_message: error_message.as_deref(),
                    };
                    render_recording(f, area, &view);
                }
            },
            Screen::Phone(state) => render_phone(
                f,
                area,
                i18n::text(lang, Msg::PhoneTitle),
                i18n::text(lang, Msg::PhoneInstruction),
                i18n::text(lang, Msg::PhoneFormat),
                i18n::text(lang, Msg::PhonePlaceholder),
                state,
            ),
            Screen::Questionnaire(disease, engine) => {
                render_questionnaire(f, area, lang, engine, i18n::questions(*disease, lang));
            }
            Screen::Results(results) => render_results(
                f,
                area,
                lang,
                results.assessment.as_ref(),
                results.export_notice.as_deref(),
            ),
        }
    }

    fn footer_hints(&self) -> Line<'static> {
        use super::ui::key_hints;
        let lang = self.lang;

        match &self.screen {
            Screen::Language(_) | Screen::Age(_) | Screen::Gender(_) | Screen::DiseaseSelect(_) => {
                key_hints(&[
                    ("↑↓", "Navigate"),
                    ("Enter", "Select"),
                    ("Ctrl-Q", "Quit"),
                ])
            }
            Screen::PatientPhoto(capture) => {
                Self::capture_hints(lang, &capture.phase(), Msg::CameraCapture)
            }
            Screen::Cnic(capture) => Self::capture_hints(lang, &capture.phase(), Msg::CnicCapture),
            Screen::DiseaseCapture(disease, capture) => {
                let action = match disease {
                    Disease::Eyes => Msg::EyesCaptureAction,
                    Disease::Skin => Msg::SkinCaptureAction,
                    _ => Msg::DengueCaptureAction,
                };
                Self::capture_hints(lang, &capture.phase(), action)
            }
            Screen::Breathing(breathing) => match breathing.step {
                BreathingStep::Xray => Self::capture_hints(
                    lang,
                    &breathing.camera.phase(),
                    Msg::BreathingXrayCapture,
                ),
                BreathingStep::Audio => {
                    let record_label =
                        if *breathing.recorder.phase() == RecordingPhase::Recording {
                            i18n::text(lang, Msg::BreathingStethStop)
                        } else {
                            i18n::text(lang, Msg::BreathingStethRecord)
                        };
                    key_hints(&[
                        ("Space", record_label),
                        ("R", i18n::text(lang, Msg::CameraRetake)),
                        ("Enter", i18n::text(lang, Msg::CameraContinue)),
                    ])
                }
            },
            Screen::Phone(_) => key_hints(&[
                ("0-9", i18n::text(lang, Msg::PhoneLabel)),
                ("Backspace", "Delete"),
                ("Enter", i18n::text(lang, Msg::PhoneContinue)),
            ]),
            Screen::Questionnaire(_, _) => key_hints(&[
                ("1", i18n::text(lang, Msg::QuestionnaireYes)),
                ("2", i18n::text(lang, Msg::QuestionnaireNo)),
                ("3", i18n::text(lang, Msg::QuestionnaireSometimes)),
            ]),
            Screen::Results(_) => key_hints(&[
                ("D", i18n::text(lang, Msg::ResultsDownloadReport)),
                ("Enter", i18n::text(lang, Msg::ResultsBackToHome)),
            ]),
        }
    }

    fn capture_hints(lang: Language, phase: &CapturePhase, action: Msg) -> Line<'static> {
        use super::ui::key_hints;
        match phase {
            CapturePhase::Live => key_hints(&[
                ("Space", i18n::text(lang, action)),
                ("Ctrl-Q", "Quit"),
            ]),
            CapturePhase::Captured => key_hints(&[
                ("Enter", i18n::text(lang, Msg::CameraContinue)),
                ("R", i18n::text(lang, Msg::CameraRetake)),
            ]),
            CapturePhase::Failed(_) => key_hints(&[("R", "Retry"), ("Ctrl-Q", "Quit")]),
            _ => key_hints(&[("Ctrl-Q", "Quit")]),
        }
    }
}
