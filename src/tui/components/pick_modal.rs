//! Result overlay for `pick_random`, the terminal stand-in for a blocking
//! alert: it sits above everything until any key dismisses it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::component::Component;
use crate::tui::components::choice_prompt::PROMPT_LABEL;

/// Stateless overlay showing the drawn option.
pub struct PickModal<'a> {
    /// The drawn element, or `None` when the fixed-range draw missed the set.
    pub chosen: Option<&'a str>,
}

impl<'a> PickModal<'a> {
    pub fn new(chosen: Option<&'a str>) -> Self {
        Self { chosen }
    }

    /// Center a `width` x `height` box inside `area`.
    fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let [area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        area
    }
}

impl Component for PickModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content = match self.chosen {
            Some(text) => Span::styled(
                text,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            // The fixed 3-slot draw landed past the end of the option set.
            None => Span::styled(
                "undefined",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        };

        let width = (content.width() as u16 + 6)
            .max(PROMPT_LABEL.len() as u16 + 4)
            .min(area.width);
        let modal_area = Self::centered(area, width, 5);

        let lines = vec![
            Line::from(content).alignment(Alignment::Center),
            Line::default(),
            Line::from(Span::styled(
                "press any key",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        ];
        let body = Paragraph::new(lines).block(
            Block::bordered()
                .title(PROMPT_LABEL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        frame.render_widget(Clear, modal_area);
        frame.render_widget(body, modal_area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_to_text(modal: &mut PickModal) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| modal.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_modal_shows_chosen_option() {
        let text = render_to_text(&mut PickModal::new(Some("Pizza")));
        assert!(text.contains(PROMPT_LABEL));
        assert!(text.contains("Pizza"));
        assert!(text.contains("press any key"));
    }

    #[test]
    fn test_modal_shows_undefined_on_miss() {
        let text = render_to_text(&mut PickModal::new(None));
        assert!(text.contains("undefined"));
    }
}
