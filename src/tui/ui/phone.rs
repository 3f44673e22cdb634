//! Phone-number entry screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::domain::PhoneNumber;
use crate::tui::styles::MedicalTheme;

pub struct PhoneState {
    /// Formatted display buffer (`+92 - 3XXXXXXXXX` as it grows).
    pub input: String,
    /// Localized validation error, cleared on the next keystroke.
    pub error: Option<&'static str>,
}

impl PhoneState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: String::new(),
            error: None,
        }
    }

    /// Accept a keystroke and re-normalize the display form.
    pub fn input_char(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        let mut raw = self.input.clone();
        raw.push(c);
        self.input = PhoneNumber::format_partial(&raw);
        self.error = None;
    }

    /// Drop the last digit and re-normalize.
    pub fn backspace(&mut self) {
        let mut digits: String = self.input.chars().filter(char::is_ascii_digit).collect();
        digits.pop();
        self.input = PhoneNumber::format_partial(&digits);
        self.error = None;
    }

    /// Validate the entry; on success the canonical number comes back and
    /// the entry buffer is wiped.
    pub fn submit(&mut self) -> Option<PhoneNumber> {
        match PhoneNumber::parse(&self.input) {
            Ok(phone) => {
                // The raw contact number should not linger in UI memory.
                self.input.zeroize();
                self.input = String::new();
                self.error = None;
                Some(phone)
            }
            Err(_) => None,
        }
    }
}

impl Default for PhoneState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render_phone(
    f: &mut Frame,
    area: Rect,
    title: &str,
    instruction: &str,
    format_hint: &str,
    placeholder: &str,
    state: &PhoneState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(title.to_string(), MedicalTheme::title())),
        Line::from(Span::styled(
            instruction.to_string(),
            MedicalTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, chunks[0]);

    let border = if state.error.is_some() {
        MedicalTheme::danger()
    } else {
        MedicalTheme::border_focused()
    };
    let value = if state.input.is_empty() {
        Span::styled(placeholder.to_string(), MedicalTheme::text_muted())
    } else {
        Span::styled(state.input.clone(), MedicalTheme::text())
    };
    let entry = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        value,
        Span::styled("▌", MedicalTheme::focused()),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(border));
    f.render_widget(entry, chunks[1]);

    let status = if let Some(error) = state.error {
        Line::from(vec![
            Span::styled("! ", MedicalTheme::danger()),
            Span::styled(error, MedicalTheme::danger()),
        ])
    } else {
        Line::from(Span::styled(
            format_hint.to_string(),
            MedicalTheme::text_muted(),
        ))
    };
    f.render_widget(Paragraph::new(status).alignment(Alignment::Center), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_formats_live() {
        let mut state = PhoneState::new();
        for c in "0300".chars() {
            state.input_char(c);
        }
        assert_eq!(state.input, "+92 - 300");

        for c in "1234567".chars() {
            state.input_char(c);
        }
        assert_eq!(state.input, "+92 - 3001234567");
    }

    #[test]
    fn test_non_digits_are_ignored() {
        let mut state = PhoneState::new();
        for c in "3a0-0 x1".chars() {
            state.input_char(c);
        }
        assert_eq!(state.input, "+92 - 3001");
    }

    #[test]
    fn test_backspace_drops_last_digit() {
        let mut state = PhoneState::new();
        for c in "3001".chars() {
            state.input_char(c);
        }
        assert_eq!(state.input, "+92 - 3001");
        state.backspace();
        assert_eq!(state.input, "+92 - 300");
    }

    #[test]
    fn test_submit_wipes_buffer_on_success() {
        let mut state = PhoneState::new();
        for c in "3001234567".chars() {
            state.input_char(c);
        }
        let phone = state.submit().expect("Should validate");
        assert_eq!(phone.as_str(), "+92 - 3001234567");
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_submit_rejects_short_entry() {
        let mut state = PhoneState::new();
        for c in "300".chars() {
            state.input_char(c);
        }
        assert!(state.submit().is_none());
        assert_eq!(state.input, "+92 - 300", "entry survives for correction");
    }
}
