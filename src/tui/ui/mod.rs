//! UI module: view components for the TUI, one per wizard step.

pub mod capture;
pub mod choice;
pub mod phone;
pub mod questionnaire;
pub mod results;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::Frame as CameraFrame;
use crate::tui::styles::MedicalTheme;

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![Span::styled(
        "DISCLAIMER: This tool provides indicative screening only and does not replace professional medical evaluation.",
        MedicalTheme::text_muted(),
    )])];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(MedicalTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}

/// Standard screen header: app name, step title, step subtitle.
pub fn render_screen_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" MediScan", MedicalTheme::subtitle()),
        Span::styled(" │ ", MedicalTheme::text_muted()),
        Span::styled(title.to_string(), MedicalTheme::title()),
        Span::styled(format!(" │ {subtitle}"), MedicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

/// Footer with `[key] description` hint pairs.
pub fn key_hints(pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, desc) in pairs {
        spans.push(Span::styled(format!("[{key}] "), MedicalTheme::key_hint()));
        spans.push(Span::styled(format!("{desc} "), MedicalTheme::key_desc()));
    }
    Line::from(spans)
}

pub fn render_footer(f: &mut Frame, area: Rect, content: Line<'_>) {
    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(footer, area);
}

/// Centered inline error panel with a retry hint, shared by the capture
/// screens.
pub fn render_error_panel(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("!", MedicalTheme::danger())),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), MedicalTheme::text())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(MedicalTheme::danger()),
    );

    f.render_widget(content, area);
}

/// Luma ramp used to draw camera frames as text.
const LUMA_RAMP: &[u8] = b" .:-=+*#%@";

/// Render a camera frame as block-art inside `area`, nearest-neighbor
/// downsampled to the cell grid.
pub fn render_frame_preview(f: &mut Frame, area: Rect, frame: &CameraFrame, title: &str) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            MedicalTheme::text_secondary(),
        ))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border_focused());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 || frame.width == 0 || frame.height == 0 {
        return;
    }

    let mut lines = Vec::with_capacity(inner.height as usize);
    for row in 0..inner.height {
        let mut text = String::with_capacity(inner.width as usize);
        let src_y = (u32::from(row) * frame.height) / u32::from(inner.height);
        for col in 0..inner.width {
            let src_x = (u32::from(col) * frame.width) / u32::from(inner.width);
            let luma = frame.pixel(src_x, src_y) as usize;
            let idx = luma * (LUMA_RAMP.len() - 1) / 255;
            text.push(LUMA_RAMP[idx] as char);
        }
        lines.push(Line::from(Span::styled(text, MedicalTheme::text())));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
