//! Single option row: the option text plus a delete affordance on the
//! selected row. Transient - created fresh each frame by `OptionList`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

#[derive(Clone, Copy)]
pub struct OptionItem<'a> {
    /// Zero-based position in the option set. Stable row identity: rows are
    /// addressed by index, never by a per-frame key.
    pub index: usize,
    pub text: &'a str,
    pub is_selected: bool,
}

impl<'a> OptionItem<'a> {
    pub fn new(index: usize, text: &'a str, is_selected: bool) -> Self {
        Self {
            index,
            text,
            is_selected,
        }
    }
}

impl Component for OptionItem<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let marker = if self.is_selected { "> " } else { "  " };
        let style = if self.is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled(marker, style),
            Span::styled(format!("{}. ", self.index + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(self.text, style),
        ];
        if self.is_selected {
            spans.push(Span::styled(
                "  [d] delete",
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
