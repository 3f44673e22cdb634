//! Results screen view: score, severity tier, summary counts and the
//! recommendation list.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::domain::{Assessment, Language};
use crate::i18n::{self, Msg};
use crate::tui::styles::MedicalTheme;

pub fn render_results(
    f: &mut Frame,
    area: Rect,
    lang: Language,
    assessment: Option<&Assessment>,
    export_notice: Option<&str>,
) {
    let Some(assessment) = assessment else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No completed questionnaire found",
            MedicalTheme::text_muted(),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        );
        f.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        i18n::text(lang, Msg::ResultsTitle),
        MedicalTheme::title(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    // Risk score gauge in the severity color.
    let severity_style = MedicalTheme::severity(assessment.severity);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" Risk Score ", MedicalTheme::text_secondary()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .gauge_style(severity_style)
        .percent(u16::from(assessment.risk_score))
        .label(format!("{}%", assessment.risk_score));
    f.render_widget(gauge, chunks[1]);

    let severity_line = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{}: ", i18n::text(lang, Msg::ResultsSeverity)),
            MedicalTheme::text_secondary(),
        ),
        Span::styled(
            i18n::text(lang, i18n::severity_msg(assessment.severity)),
            severity_style.add_modifier(ratatui::style::Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(severity_line, chunks[2]);

    // Summary counts.
    let summary = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(
                "{}: {}",
                i18n::text(lang, Msg::QuestionnaireQuestion),
                assessment.total_questions
            ),
            MedicalTheme::text(),
        )),
        Line::from(Span::styled(
            format!(
                "{}: {}",
                i18n::text(lang, Msg::QuestionnaireYes),
                assessment.yes_count
            ),
            MedicalTheme::success(),
        )),
        Line::from(Span::styled(
            format!(
                "{}: {}",
                i18n::text(lang, Msg::QuestionnaireSometimes),
                assessment.sometimes_count
            ),
            MedicalTheme::warning(),
        )),
    ])
    .block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", i18n::text(lang, Msg::ResultsSummary)),
                MedicalTheme::text_secondary(),
            ))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(summary, chunks[3]);

    // Recommendations.
    let recs: Vec<Line> = assessment
        .recommendations()
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            Line::from(vec![
                Span::styled(format!("{}. ", i + 1), MedicalTheme::key_hint()),
                Span::styled((*rec).to_string(), MedicalTheme::text()),
            ])
        })
        .collect();
    let recommendations = Paragraph::new(recs).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", i18n::text(lang, Msg::ResultsRecommendations)),
                MedicalTheme::text_secondary(),
            ))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );
    f.render_widget(recommendations, chunks[4]);

    if let Some(notice) = export_notice {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                notice.to_string(),
                MedicalTheme::info(),
            )))
            .alignment(Alignment::Center),
            chunks[5],
        );
    }
}
