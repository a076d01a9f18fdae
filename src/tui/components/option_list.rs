//! # OptionList Component
//!
//! Scrollable view of the stored options.
//!
//! ## Architecture
//!
//! `OptionList` is a transient component (created each frame) that wraps
//! `&'a mut OptionListState` (persistent cursor/scroll state) and the option
//! slice (props). Since `Component::render` takes `&mut self`, the scroll
//! offset can be adjusted during the render pass.
//!
//! Row identity is positional: each visible row is addressed by its index in
//! the option set, so an unchanged set renders identical rows frame to frame.
//!
//! ## Events
//!
//! Emits [`ListEvent`] values: delete the selected option, or clear the whole
//! set. The parent turns these into reducer actions; the list itself never
//! mutates the option set.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::option_item::OptionItem;
use crate::tui::event::TuiEvent;

/// Shown inside the list while the option set is empty.
pub const EMPTY_MESSAGE: &str = "Please add an option!";

/// High-level events emitted by the OptionList.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Delete the option carrying this text.
    Delete(String),
    /// Remove all options.
    Clear,
}

/// Cursor and scroll state for the option list.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct OptionListState {
    /// Focused row index.
    pub cursor: usize,
    /// First visible row.
    scroll_offset: usize,
}

impl OptionListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the cursor inside the option set after removals.
    fn clamp_cursor(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Keep the cursor row inside the viewport.
    fn scroll_to_cursor(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.cursor + 1 - viewport_height;
        }
    }
}

/// Transient list component: option slice as props, persistent state by
/// mutable borrow.
pub struct OptionList<'a> {
    pub options: &'a [String],
    pub state: &'a mut OptionListState,
    /// Whether the list currently has keyboard focus.
    pub focused: bool,
}

impl<'a> OptionList<'a> {
    pub fn new(options: &'a [String], state: &'a mut OptionListState, focused: bool) -> Self {
        Self {
            options,
            state,
            focused,
        }
    }

    fn selected_text(&self) -> Option<&str> {
        self.options.get(self.state.cursor).map(String::as_str)
    }
}

impl Component for OptionList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp_cursor(self.options.len());

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(format!("Options ({})", self.options.len()))
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.options.is_empty() {
            let empty = Paragraph::new(EMPTY_MESSAGE).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
            frame.render_widget(empty, inner);
            return;
        }

        self.state.scroll_to_cursor(inner.height as usize);

        let visible = self
            .options
            .iter()
            .enumerate()
            .skip(self.state.scroll_offset)
            .take(inner.height as usize);
        for (row, (index, text)) in visible.enumerate() {
            let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            let is_selected = self.focused && index == self.state.cursor;
            OptionItem::new(index, text, is_selected).render(frame, row_area);
        }
    }
}

impl EventHandler for OptionList<'_> {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        self.state.clamp_cursor(self.options.len());
        match event {
            TuiEvent::CursorUp => {
                self.state.cursor = self.state.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if self.state.cursor + 1 < self.options.len() {
                    self.state.cursor += 1;
                }
                None
            }
            TuiEvent::Delete | TuiEvent::InputChar('d') => {
                self.selected_text().map(|text| ListEvent::Delete(text.to_string()))
            }
            TuiEvent::InputChar('c') => {
                if self.options.is_empty() {
                    None
                } else {
                    Some(ListEvent::Clear)
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn render_to_text(options: &[String], state: &mut OptionListState) -> String {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| OptionList::new(options, state, true).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_empty_list_shows_message() {
        let mut state = OptionListState::new();
        let text = render_to_text(&[], &mut state);
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(text.contains("Options (0)"));
    }

    #[test]
    fn test_list_shows_all_options_with_count() {
        let opts = options(&["Pizza", "Sushi"]);
        let mut state = OptionListState::new();
        let text = render_to_text(&opts, &mut state);
        assert!(text.contains("Options (2)"));
        assert!(text.contains("1. Pizza"));
        assert!(text.contains("2. Sushi"));
        assert!(!text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_cursor_navigation_clamps_at_ends() {
        let opts = options(&["A", "B"]);
        let mut state = OptionListState::new();

        let mut list = OptionList::new(&opts, &mut state, true);
        assert_eq!(list.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(list.state.cursor, 0);

        list.handle_event(&TuiEvent::CursorDown);
        assert_eq!(list.state.cursor, 1);
        list.handle_event(&TuiEvent::CursorDown);
        assert_eq!(list.state.cursor, 1);
    }

    #[test]
    fn test_delete_emits_selected_text() {
        let opts = options(&["A", "B"]);
        let mut state = OptionListState::new();
        let mut list = OptionList::new(&opts, &mut state, true);

        list.handle_event(&TuiEvent::CursorDown);
        let event = list.handle_event(&TuiEvent::InputChar('d'));
        assert_eq!(event, Some(ListEvent::Delete("B".to_string())));
    }

    #[test]
    fn test_delete_on_empty_list_emits_nothing() {
        let mut state = OptionListState::new();
        let mut list = OptionList::new(&[], &mut state, true);
        assert_eq!(list.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_clear_emits_only_when_nonempty() {
        let mut state = OptionListState::new();
        let mut list = OptionList::new(&[], &mut state, true);
        assert_eq!(list.handle_event(&TuiEvent::InputChar('c')), None);

        let opts = options(&["A"]);
        let mut state = OptionListState::new();
        let mut list = OptionList::new(&opts, &mut state, true);
        assert_eq!(
            list.handle_event(&TuiEvent::InputChar('c')),
            Some(ListEvent::Clear)
        );
    }

    #[test]
    fn test_cursor_clamps_after_removal() {
        let mut state = OptionListState::new();
        state.cursor = 2;
        let opts = options(&["A"]);
        let mut list = OptionList::new(&opts, &mut state, true);
        let event = list.handle_event(&TuiEvent::InputChar('d'));
        assert_eq!(event, Some(ListEvent::Delete("A".to_string())));
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let opts = options(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        let mut state = OptionListState::new();
        state.cursor = 7;
        // 6-row terminal has 4 inner rows; the last option must still render
        let text = render_to_text(&opts, &mut state);
        assert!(text.contains("8. H"));
        assert!(!text.contains("1. A"));
    }
}
