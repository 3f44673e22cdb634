//! Questionnaire screen view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::application::QuestionnaireEngine;
use crate::domain::{Answer, Language};
use crate::i18n::{self, Msg};
use crate::tui::styles::MedicalTheme;

/// The three options in display order with their select keys.
pub const ANSWER_KEYS: [(char, Answer, Msg); 3] = [
    ('1', Answer::Yes, Msg::QuestionnaireYes),
    ('2', Answer::No, Msg::QuestionnaireNo),
    ('3', Answer::Sometimes, Msg::QuestionnaireSometimes),
];

pub fn render_questionnaire(
    f: &mut Frame,
    area: Rect,
    lang: Language,
    engine: &QuestionnaireEngine,
    questions: &[&str],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(11),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    // Title and position counter.
    let counter = format!(
        "{} {} {} {}",
        i18n::text(lang, Msg::QuestionnaireQuestion),
        engine.index() + 1,
        i18n::text(lang, Msg::QuestionnaireOf),
        engine.total()
    );
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            i18n::text(lang, Msg::QuestionnaireTitle),
            MedicalTheme::title(),
        )),
        Line::from(Span::styled(counter, MedicalTheme::text_secondary())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, chunks[0]);

    // Progress bar.
    let progress = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .gauge_style(MedicalTheme::info())
        .ratio(engine.progress().clamp(0.0, 1.0));
    f.render_widget(progress, chunks[1]);

    // The question itself.
    let question = questions.get(engine.index()).copied().unwrap_or_default();
    let question_panel = Paragraph::new(Line::from(Span::styled(
        question.to_string(),
        MedicalTheme::title(),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border_focused()),
    );
    f.render_widget(question_panel, chunks[2]);

    // The three fixed options.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(chunks[3]);

    let current = engine.current_answer();
    for (i, (key, answer, msg)) in ANSWER_KEYS.iter().enumerate() {
        let selected = current == Some(*answer);
        let border = if selected {
            MedicalTheme::success()
        } else {
            MedicalTheme::border()
        };
        let label_style = if selected {
            MedicalTheme::focused()
        } else {
            MedicalTheme::text()
        };

        let mut spans = vec![
            Span::styled(format!(" [{key}] "), MedicalTheme::key_hint()),
            Span::styled(i18n::text(lang, *msg), label_style),
        ];
        if selected {
            spans.push(Span::styled(" ✓", MedicalTheme::success()));
        }

        let row = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border),
        );
        f.render_widget(row, rows[i]);
    }

    // Auto-advance indicator.
    if engine.advancing() {
        let note = if engine.index() + 1 == engine.total() {
            "Submitting answers..."
        } else {
            "Moving to next question..."
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                note,
                MedicalTheme::text_muted(),
            )))
            .alignment(Alignment::Center),
            chunks[4],
        );
    }
}
