use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{ChoicePrompt, FORM_HEIGHT, OptionList, PageHeader, PickModal};
use crate::tui::{Focus, TuiState};

/// Compose the whole tree: header, prompt, option list, entry form, footer,
/// and the pick overlay when one is active. Data flows straight down; every
/// child gets read-only props plus whatever persistent state it owns.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(2),           // header
        Length(1),           // choice prompt
        Min(0),              // option list
        Length(FORM_HEIGHT), // entry form
        Length(1),           // key hints
    ]);
    let [header_area, prompt_area, list_area, form_area, footer_area] =
        layout.areas(frame.area());

    PageHeader::new(app.title.clone(), Some(app.subtitle.clone())).render(frame, header_area);
    ChoicePrompt::new(app.has_options()).render(frame, prompt_area);
    OptionList::new(
        &app.options,
        &mut tui.option_list,
        tui.focus == Focus::List,
    )
    .render(frame, list_area);
    tui.entry_form.render(frame, form_area);

    let hints = match tui.focus {
        Focus::Input => "Enter add · Tab options · Ctrl+R pick · Ctrl+C quit",
        Focus::List => "↑/↓ move · d delete · c remove all · Tab input · Ctrl+C quit",
    };
    frame.render_widget(
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        footer_area,
    );

    if let Some(result) = &app.pick_result {
        PickModal::new(result.chosen.as_deref()).render(frame, frame.area());
    }
}
