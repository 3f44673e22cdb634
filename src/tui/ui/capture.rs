//! Capture screen views: live preview, guidance overlay, captured/confirm
//! state and the breathing screen's recording panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::application::{CapturePhase, GuideStatus, RecordingPhase};
use crate::domain::Frame as CameraFrame;
use crate::tui::styles::MedicalTheme;

use super::{render_error_panel, render_frame_preview};

/// Everything a capture view needs to draw one tick.
pub struct CaptureView<'a> {
    pub title: &'a str,
    pub instruction: &'a str,
    pub loading: &'a str,
    pub phase: &'a CapturePhase,
    /// Last frame read from the device; frozen on capture.
    pub preview: Option<&'a CameraFrame>,
    /// Guidance overlay for the face-guided screen, absent elsewhere.
    pub guide: Option<GuideStatus>,
    /// Localized message when `phase` is `Failed`.
    pub error_message: Option<&'a str>,
    /// Extra positioning hint (skin screen).
    pub frame_guide: Option<&'a str>,
}

pub fn render_capture(f: &mut Frame, area: Rect, view: &CaptureView<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(view.title.to_string(), MedicalTheme::title())),
        Line::from(Span::styled(
            view.instruction.to_string(),
            MedicalTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, chunks[0]);

    match view.phase {
        CapturePhase::Acquiring => {
            let loading = Paragraph::new(Line::from(Span::styled(
                view.loading.to_string(),
                MedicalTheme::text_muted(),
            )))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(MedicalTheme::border()),
            );
            f.render_widget(loading, chunks[1]);
        }
        CapturePhase::Live => {
            if let Some(frame) = view.preview {
                render_frame_preview(f, chunks[1], frame, "Live");
            }
        }
        CapturePhase::Captured | CapturePhase::Confirmed => {
            if let Some(frame) = view.preview {
                render_frame_preview(f, chunks[1], frame, "Captured");
            }
        }
        CapturePhase::Failed(_) => {
            render_error_panel(f, chunks[1], view.error_message.unwrap_or_default());
        }
    }

    let status = status_line(view);
    f.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        chunks[2],
    );
}

fn status_line(view: &CaptureView<'_>) -> Line<'static> {
    if let Some(hint) = view.frame_guide {
        if *view.phase == CapturePhase::Live {
            return Line::from(Span::styled(hint.to_string(), MedicalTheme::info()));
        }
    }

    match (view.phase, view.guide) {
        (CapturePhase::Live, Some(GuideStatus::Aligned { seconds_left })) => Line::from(vec![
            Span::styled("● ", MedicalTheme::success()),
            Span::styled(
                format!("Hold still, capturing in {seconds_left}"),
                MedicalTheme::success(),
            ),
        ]),
        (CapturePhase::Live, Some(GuideStatus::Misaligned)) => Line::from(Span::styled(
            "Center your face in the frame",
            MedicalTheme::warning(),
        )),
        (CapturePhase::Live, Some(GuideStatus::Searching)) => Line::from(Span::styled(
            "Looking for a face...",
            MedicalTheme::text_muted(),
        )),
        (CapturePhase::Live, Some(GuideStatus::ManualOnly)) => Line::from(Span::styled(
            "Auto-capture unavailable; press Space to capture",
            MedicalTheme::text_muted(),
        )),
        (CapturePhase::Captured, _) => Line::from(Span::styled(
            "Captured. Confirm to continue or retake",
            MedicalTheme::text_secondary(),
        )),
        _ => Line::from(""),
    }
}

/// Recording panel for the breathing screen's stethoscope sub-flow.
pub struct RecordingView<'a> {
    pub title: &'a str,
    pub instruction: &'a str,
    pub phase: &'a RecordingPhase,
    pub error_message: Option<&'a str>,
}

pub fn render_recording(f: &mut Frame, area: Rect, view: &RecordingView<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(view.title.to_string(), MedicalTheme::title())),
        Line::from(Span::styled(
            view.instruction.to_string(),
            MedicalTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, chunks[0]);

    let body = match view.phase {
        RecordingPhase::Idle => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Ready to record",
                MedicalTheme::text_secondary(),
            )),
        ],
        RecordingPhase::Recording => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("● ", MedicalTheme::danger()),
                Span::styled("Recording...", MedicalTheme::text()),
            ]),
        ],
        RecordingPhase::Recorded => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("✓ ", MedicalTheme::success()),
                Span::styled("Recording saved", MedicalTheme::text()),
            ]),
        ],
        RecordingPhase::Failed(_) => {
            render_error_panel(f, chunks[1], view.error_message.unwrap_or_default());
            return;
        }
    };

    let panel = Paragraph::new(body).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(panel, chunks[1]);
}
