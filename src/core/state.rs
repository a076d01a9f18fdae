//! # Application State
//!
//! Core business state for Choices. This module contains domain data only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── options: Vec<String>            // the option set, insertion order
//! ├── pick_result: Option<PickResult> // active "what should I do?" overlay
//! ├── draw_mode: DrawMode             // scaled or fixed random range
//! ├── title: String                   // page header copy
//! └── subtitle: String                // page header copy
//! ```
//!
//! The option set never contains duplicates: every insertion goes through the
//! validation in `update(state, action)` in action.rs, and nothing ever
//! deduplicates after the fact.

use serde::{Deserialize, Serialize};

use crate::core::config::ResolvedConfig;

/// Number of slots used by the fixed-width draw mode.
pub const FIXED_DRAW_RANGE: usize = 3;

/// How `pick_random` chooses its index range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Uniform over the current option count. Can never miss.
    #[default]
    Scaled,
    /// Uniform over a constant range of [`FIXED_DRAW_RANGE`] slots regardless
    /// of option count. Misses (index past the end) show as "undefined".
    Fixed,
}

/// Outcome of a random pick, displayed in a modal overlay until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickResult {
    /// The element at the drawn index. `None` when the index fell outside the
    /// option set (only reachable in [`DrawMode::Fixed`]).
    pub chosen: Option<String>,
}

pub struct App {
    pub options: Vec<String>,
    pub pick_result: Option<PickResult>,
    pub draw_mode: DrawMode,
    pub title: String,
    pub subtitle: String,
}

impl App {
    pub fn new(title: String, subtitle: String, draw_mode: DrawMode) -> Self {
        Self {
            options: Vec::new(),
            pick_result: None,
            draw_mode,
            title,
            subtitle,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.title.clone(), config.subtitle.clone(), config.draw_mode)
    }

    /// Whether the pick control is currently actionable.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}
