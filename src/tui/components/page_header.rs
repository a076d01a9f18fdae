//! # PageHeader Component
//!
//! Static title and subtitle at the top of the screen.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! PageHeader is purely presentational - it receives all data as props and has
//! no internal state or event handling. Both props come from the resolved
//! config; the component doesn't care where they come from.
//!
//! ### Props-in-Struct Pattern
//!
//! Props are stored as struct fields rather than passed as render() parameters
//! because the Component trait requires a fixed render() signature.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Subtitle used when the caller doesn't provide one.
pub const DEFAULT_SUBTITLE: &str = "Some Default";

/// Stateless header component showing the application title and subtitle.
pub struct PageHeader {
    pub title: String,
    pub subtitle: String,
}

impl PageHeader {
    pub fn new(title: String, subtitle: Option<String>) -> Self {
        Self {
            title,
            subtitle: subtitle.unwrap_or_else(|| DEFAULT_SUBTITLE.to_string()),
        }
    }
}

impl Component for PageHeader {
    /// Render the header as two lines: a bold title and a dim subtitle.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.title.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.subtitle.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(ratatui::text::Text::from(lines), area);
    }
}
