//! # TUI Components
//!
//! All UI components for the terminal interface, following two patterns:
//!
//! **Stateless components** receive all data as props and just render:
//! [`PageHeader`], [`ChoicePrompt`], `OptionItem`, [`PickModal`].
//!
//! **Stateful components** hold local state and emit high-level events:
//! [`EntryForm`] (buffer, cursor, last validation error) and [`OptionList`]
//! (cursor and scroll state, wrapped each frame around the option slice).
//!
//! Components compose top-down: props and callbacks flow from the event loop
//! in `tui::run`, events flow back up as `FormEvent`/`ListEvent` values that
//! the loop turns into `core::Action`s. Siblings never talk to each other.
//!
//! Each component file co-locates its state types, event types, rendering,
//! event handling, and tests.

mod choice_prompt;
mod entry_form;
mod option_item;
mod option_list;
mod page_header;
mod pick_modal;

pub use choice_prompt::ChoicePrompt;
pub use entry_form::{EntryForm, FORM_HEIGHT, FormEvent};
pub use option_list::{ListEvent, OptionList, OptionListState};
pub use page_header::PageHeader;
pub use pick_modal::PickModal;
