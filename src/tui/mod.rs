//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the component
//! tree, and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event loop
//!
//! Everything runs on one thread: poll a key, map it to a [`TuiEvent`], route
//! it by focus (entry form or option list), fold the resulting action through
//! `core::action::update`, then execute the returned effect at the loop
//! boundary. Persistence is one of those effects: whenever a reducer step
//! changed the option count it returns `Effect::SaveOptions` and the loop
//! serializes the set to disk. Redraws happen only after an event arrived.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use std::time::Duration;

use log::{info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::store;
use crate::tui::component::EventHandler;
use crate::tui::components::{EntryForm, FormEvent, ListEvent, OptionList, OptionListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which component currently receives keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Text editing in the entry form. Tab/Esc switches to List.
    Input,
    /// Navigating options. Typing switches back to Input.
    List,
}

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub option_list: OptionListState,
    pub entry_form: EntryForm,
    pub focus: Focus,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            option_list: OptionListState::new(),
            entry_form: EntryForm::new(),
            // User expects to type immediately
            focus: Focus::Input,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    app.options = store::load_options(&config.data_file);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync EntryForm props with TUI state
        tui.entry_form.focused = tui.focus == Focus::Input;

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain all pending events before the next draw
        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of focus
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // An open pick overlay is modal: any key dismisses it
            if app.pick_result.is_some() {
                update(&mut app, Action::DismissPick);
                continue;
            }

            // Ctrl+R works in both modes; a no-op while the set is empty
            if matches!(event, TuiEvent::Pick) {
                update(&mut app, Action::PickRandom);
                continue;
            }

            if matches!(event, TuiEvent::FocusNext) {
                tui.focus = match tui.focus {
                    Focus::Input => Focus::List,
                    Focus::List => Focus::Input,
                };
                continue;
            }

            match tui.focus {
                Focus::Input => {
                    // Esc leaves the form for list navigation
                    if matches!(event, TuiEvent::Escape) {
                        tui.focus = Focus::List;
                        continue;
                    }
                    if let Some(FormEvent::Submit(text)) = tui.entry_form.handle_event(&event) {
                        match update(&mut app, Action::AddOption(text)) {
                            Effect::SaveOptions => {
                                tui.entry_form.accept();
                                save_options(&app, &config);
                            }
                            Effect::RejectInput(error) => tui.entry_form.reject(error),
                            Effect::None | Effect::Quit => {}
                        }
                    }
                }
                Focus::List => {
                    // Esc returns to the form
                    if matches!(event, TuiEvent::Escape) {
                        tui.focus = Focus::Input;
                        continue;
                    }
                    // Typing anything that isn't a list command switches back
                    // to the form and forwards the keystroke
                    if let TuiEvent::InputChar(c) = &event
                        && !matches!(*c, 'd' | 'c' | 'q')
                    {
                        tui.focus = Focus::Input;
                        tui.entry_form.handle_event(&event);
                        continue;
                    }
                    if matches!(event, TuiEvent::InputChar('q')) {
                        should_quit = true;
                        continue;
                    }

                    let list_event =
                        OptionList::new(&app.options, &mut tui.option_list, true)
                            .handle_event(&event);
                    let action = match list_event {
                        Some(ListEvent::Delete(text)) => Action::RemoveOption(text),
                        Some(ListEvent::Clear) => Action::RemoveAll,
                        None => continue,
                    };
                    if update(&mut app, action) == Effect::SaveOptions {
                        save_options(&app, &config);
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down with {} options stored", app.options.len());
    ratatui::restore();
    Ok(())
}

/// Serialize the option set; failures are logged and otherwise swallowed.
fn save_options(app: &App, config: &ResolvedConfig) {
    if let Err(e) = store::save_options(&config.data_file, &app.options) {
        warn!("Failed to save options to {}: {}", config.data_file.display(), e);
    }
}
