//! # EntryForm Component
//!
//! Text input for adding options, plus the inline validation error.
//!
//! ## State Management
//!
//! The buffer, cursor, and last validation error are internal state. Whether
//! the form has focus is a prop the parent syncs each frame.
//!
//! The form itself never validates: on Enter it emits the trimmed buffer and
//! the parent runs it through the add contract. On success the parent calls
//! [`EntryForm::accept`] (input and error clear); on rejection it calls
//! [`EntryForm::reject`] and the unsuccessful text stays in place so the user
//! can correct it. The error is replaced on every submit attempt.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::action::AddError;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rows the form occupies: one error line plus a bordered single-line input.
pub const FORM_HEIGHT: u16 = 4;

/// High-level events emitted by the EntryForm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// User pressed Enter: the trimmed buffer, which may be empty. Validation
    /// is the parent's job.
    Submit(String),
}

pub struct EntryForm {
    /// Text being typed (internal state).
    pub buffer: String,
    /// Error from the last rejected submit (internal state).
    pub error: Option<AddError>,
    /// Whether the form has keyboard focus (prop, synced by parent).
    pub focused: bool,
    /// Byte offset of the cursor within `buffer`.
    cursor: usize,
}

impl EntryForm {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            error: None,
            focused: true,
            cursor: 0,
        }
    }

    /// The last submit was accepted: clear the input and any stale error.
    pub fn accept(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.error = None;
    }

    /// The last submit was rejected: show the error, keep the text.
    pub fn reject(&mut self, error: AddError) {
        self.error = Some(error);
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos - 1;
    while !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos + 1;
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}

impl Component for EntryForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Line 1: validation error (blank when none)
        let error_area = Rect::new(area.x, area.y, area.width, 1);
        if let Some(error) = self.error {
            let msg = Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red));
            frame.render_widget(msg, error_area);
        }

        // Lines 2-4: bordered input
        let input_area = Rect::new(
            area.x,
            area.y + 1,
            area.width,
            area.height.saturating_sub(1),
        );
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(self.buffer.as_str()).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .title("Add option"),
        );
        frame.render_widget(input, input_area);

        if self.focused {
            let cursor_x = self.buffer[..self.cursor].width() as u16;
            frame.set_cursor_position((input_area.x + 1 + cursor_x, input_area.y + 1));
        }
    }
}

impl EventHandler for EntryForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                None
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                }
                None
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            // Blank submits are emitted too: rejecting them (and choosing the
            // error message) is the add contract's call, not the form's.
            TuiEvent::Submit => Some(FormEvent::Submit(self.buffer.trim().to_string())),
            _ => None,
        }
    }
}
