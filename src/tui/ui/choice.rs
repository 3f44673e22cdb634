//! Generic fixed-choice screen: a closed option list, a cursor, and a brief
//! confirmation affordance before the wizard moves on.

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::styles::MedicalTheme;

/// Confirmation flash before navigating to the next step.
pub const CONFIRM_DELAY: Duration = Duration::from_millis(500);

pub struct ChoiceState {
    /// Localized option labels, in display order.
    pub options: Vec<String>,
    pub cursor: usize,
    /// Set once the user picks; navigation fires when the deadline passes.
    pub chosen: Option<usize>,
    pub confirm_deadline: Option<Instant>,
}

impl ChoiceState {
    #[must_use]
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            cursor: 0,
            chosen: None,
            confirm_deadline: None,
        }
    }

    pub fn next(&mut self) {
        if self.chosen.is_none() {
            self.cursor = (self.cursor + 1) % self.options.len();
        }
    }

    pub fn prev(&mut self) {
        if self.chosen.is_none() {
            self.cursor = if self.cursor == 0 {
                self.options.len() - 1
            } else {
                self.cursor - 1
            };
        }
    }

    /// Lock in the option under the cursor and start the confirmation flash.
    pub fn choose(&mut self, now: Instant) -> usize {
        self.chosen = Some(self.cursor);
        self.confirm_deadline = Some(now + CONFIRM_DELAY);
        self.cursor
    }

    /// The locked-in choice once the confirmation flash has run its course.
    #[must_use]
    pub fn confirmed(&self, now: Instant) -> Option<usize> {
        match (self.chosen, self.confirm_deadline) {
            (Some(idx), Some(deadline)) if now >= deadline => Some(idx),
            _ => None,
        }
    }
}

/// Render the option list with title and question.
pub fn render_choice(f: &mut Frame, area: Rect, title: &str, question: &str, state: &ChoiceState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(title.to_string(), MedicalTheme::title())),
        Line::from(Span::styled(
            question.to_string(),
            MedicalTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, chunks[0]);

    let option_height = 3;
    let constraints: Vec<Constraint> = state
        .options
        .iter()
        .map(|_| Constraint::Length(option_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(chunks[1]);

    for (i, label) in state.options.iter().enumerate() {
        let is_cursor = i == state.cursor;
        let is_chosen = state.chosen == Some(i);

        let border_style = if is_chosen {
            MedicalTheme::success()
        } else if is_cursor {
            MedicalTheme::border_focused()
        } else {
            MedicalTheme::border()
        };

        let mut spans = vec![Span::styled(
            format!(" {label} "),
            if is_cursor || is_chosen {
                MedicalTheme::focused()
            } else {
                MedicalTheme::text()
            },
        )];
        if is_chosen {
            spans.push(Span::styled("✓", MedicalTheme::success()));
        }

        let row = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        f.render_widget(row, rows[i]);
    }
}
