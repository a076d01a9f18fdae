//! # ChoicePrompt Component
//!
//! The single "What should I do?" control. Stateless: `has_options` is a prop
//! from App state, and activation arrives as a global key (Ctrl+R) handled by
//! the event loop, so pressing it with no options never reaches the reducer
//! as anything but a no-op.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub const PROMPT_LABEL: &str = "What should I do?";

/// Stateless action control, disabled (dimmed) while the option set is empty.
pub struct ChoicePrompt {
    pub has_options: bool,
}

impl ChoicePrompt {
    pub fn new(has_options: bool) -> Self {
        Self { has_options }
    }
}

impl Component for ChoicePrompt {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (key_style, label_style) = if self.has_options {
            (
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Green),
            )
        } else {
            let dim = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM);
            (dim, dim)
        };

        let line = Line::from(vec![
            Span::styled("[Ctrl+R] ", key_style),
            Span::styled(PROMPT_LABEL, label_style),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_to_terminal(prompt: &mut ChoicePrompt) -> Terminal<TestBackend> {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| prompt.render(f, f.area())).unwrap();
        terminal
    }

    #[test]
    fn test_prompt_shows_label_and_binding() {
        let terminal = render_to_terminal(&mut ChoicePrompt::new(true));
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Ctrl+R"));
        assert!(text.contains(PROMPT_LABEL));
    }

    #[test]
    fn test_prompt_dims_when_no_options() {
        let terminal = render_to_terminal(&mut ChoicePrompt::new(false));
        let cell = &terminal.backend().buffer()[(1, 0)];
        assert_eq!(cell.fg, Color::DarkGray);
        assert!(cell.modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_prompt_highlights_when_enabled() {
        let terminal = render_to_terminal(&mut ChoicePrompt::new(true));
        let cell = &terminal.backend().buffer()[(1, 0)];
        assert_eq!(cell.fg, Color::Green);
        assert!(!cell.modifier.contains(Modifier::DIM));
    }
}
