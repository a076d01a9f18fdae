//! # Actions
//!
//! Everything that can happen in Choices becomes an `Action`.
//! User submits the entry form? That's `Action::AddOption(text)`.
//! User asks for a decision? That's `Action::PickRandom`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing the side effect the caller must
//! perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This keeps the mutation contract testable:
//! `assert_eq!(update(&mut app, action), expected_effect)`.

use std::fmt;

use log::{debug, info};
use rand::Rng;

use crate::core::state::{App, DrawMode, FIXED_DRAW_RANGE, PickResult};

/// Why an add attempt was rejected. Rendered inline by the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddError {
    /// Empty or whitespace-only input.
    Empty,
    /// The exact string is already in the option set.
    Duplicate,
}

impl fmt::Display for AddError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddError::Empty => write!(f, "Enter valid value to add item"),
            AddError::Duplicate => write!(f, "Option already exists"),
        }
    }
}

impl std::error::Error for AddError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Validate and append one option (entry form submit).
    AddOption(String),
    /// Remove every element equal to the given value. No-op when absent.
    RemoveOption(String),
    /// Empty the option set.
    RemoveAll,
    /// Draw a random option and open the result overlay.
    PickRandom,
    /// Close the result overlay.
    DismissPick,
    /// Exit the application.
    Quit,
}

/// Side effect requested by `update`. The TUI layer executes these;
/// the reducer only describes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The option count changed: serialize the set to disk.
    SaveOptions,
    /// An add attempt failed validation: surface the error in the entry form.
    RejectInput(AddError),
    Quit,
}

/// Apply an action to the application state.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::AddOption(value) => {
            let value = value.trim();
            if let Err(e) = validate_add(&app.options, value) {
                debug!("Add rejected ({:?}): {:?}", e, value);
                return Effect::RejectInput(e);
            }
            app.options.push(value.to_string());
            info!("Added option ({} total)", app.options.len());
            Effect::SaveOptions
        }
        Action::RemoveOption(value) => {
            let before = app.options.len();
            app.options.retain(|o| o != &value);
            if app.options.len() == before {
                return Effect::None;
            }
            info!("Removed option ({} left)", app.options.len());
            Effect::SaveOptions
        }
        Action::RemoveAll => {
            if app.options.is_empty() {
                return Effect::None;
            }
            app.options.clear();
            info!("Removed all options");
            Effect::SaveOptions
        }
        Action::PickRandom => {
            // Unreachable from the UI while empty (the prompt is disabled),
            // but stay a no-op regardless.
            if app.options.is_empty() {
                return Effect::None;
            }
            let index = draw_index(app.options.len(), app.draw_mode, &mut rand::rng());
            let chosen = app.options.get(index).cloned();
            debug!("Picked index {} of {}: {:?}", index, app.options.len(), chosen);
            app.pick_result = Some(PickResult { chosen });
            Effect::None
        }
        Action::DismissPick => {
            app.pick_result = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// The `tryAdd` contract: blank input and exact-string duplicates are
/// rejected, in that order. State is untouched on rejection.
fn validate_add(options: &[String], value: &str) -> Result<(), AddError> {
    if value.is_empty() {
        return Err(AddError::Empty);
    }
    if options.iter().any(|o| o == value) {
        return Err(AddError::Duplicate);
    }
    Ok(())
}

/// Draw an index for `pick_random`.
///
/// `Scaled` draws uniformly over the current option count and always lands on
/// an element. `Fixed` draws over a constant 3-slot range and may land past
/// the end of the set.
pub fn draw_index(len: usize, mode: DrawMode, rng: &mut impl Rng) -> usize {
    let range = match mode {
        DrawMode::Scaled => len,
        DrawMode::Fixed => FIXED_DRAW_RANGE,
    };
    rng.random_range(0..range)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::test_support::{app_with_options, test_app};

    use super::*;

    #[test]
    fn test_add_appends_and_saves() {
        let mut app = test_app();
        let effect = update(&mut app, Action::AddOption("Pizza".to_string()));
        assert_eq!(effect, Effect::SaveOptions);
        assert_eq!(app.options, vec!["Pizza"]);
        assert!(app.has_options());
    }

    #[test]
    fn test_add_trims_before_storing() {
        let mut app = test_app();
        update(&mut app, Action::AddOption("  Sushi  ".to_string()));
        assert_eq!(app.options, vec!["Sushi"]);
    }

    #[test]
    fn test_add_rejects_empty_input() {
        let mut app = test_app();
        let effect = update(&mut app, Action::AddOption(String::new()));
        assert_eq!(effect, Effect::RejectInput(AddError::Empty));
        assert!(app.options.is_empty());
    }

    #[test]
    fn test_add_rejects_blank_input() {
        let mut app = test_app();
        let effect = update(&mut app, Action::AddOption("   ".to_string()));
        assert_eq!(effect, Effect::RejectInput(AddError::Empty));
        assert!(app.options.is_empty());
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut app = app_with_options(&["A", "B"]);
        let effect = update(&mut app, Action::AddOption("A".to_string()));
        assert_eq!(effect, Effect::RejectInput(AddError::Duplicate));
        assert_eq!(app.options, vec!["A", "B"]);
    }

    #[test]
    fn test_duplicate_rejection_is_idempotent() {
        let mut app = app_with_options(&["A"]);
        for _ in 0..3 {
            let effect = update(&mut app, Action::AddOption("A".to_string()));
            assert_eq!(effect, Effect::RejectInput(AddError::Duplicate));
        }
        assert_eq!(app.options, vec!["A"]);
    }

    #[test]
    fn test_remove_drops_matching_element() {
        let mut app = app_with_options(&["A", "B"]);
        let effect = update(&mut app, Action::RemoveOption("A".to_string()));
        assert_eq!(effect, Effect::SaveOptions);
        assert_eq!(app.options, vec!["B"]);
    }

    #[test]
    fn test_remove_absent_value_is_noop() {
        let mut app = app_with_options(&["A", "B"]);
        let effect = update(&mut app, Action::RemoveOption("C".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.options, vec!["A", "B"]);
    }

    #[test]
    fn test_remove_all_empties_the_set() {
        let mut app = app_with_options(&["A", "B", "C"]);
        let effect = update(&mut app, Action::RemoveAll);
        assert_eq!(effect, Effect::SaveOptions);
        assert!(app.options.is_empty());
    }

    #[test]
    fn test_remove_all_on_empty_set_skips_save() {
        let mut app = test_app();
        let effect = update(&mut app, Action::RemoveAll);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_pick_on_empty_set_is_noop() {
        let mut app = test_app();
        let effect = update(&mut app, Action::PickRandom);
        assert_eq!(effect, Effect::None);
        assert!(app.pick_result.is_none());
    }

    #[test]
    fn test_pick_scaled_always_lands_on_an_element() {
        let mut app = app_with_options(&["A", "B"]);
        for _ in 0..50 {
            update(&mut app, Action::PickRandom);
            let result = app.pick_result.take().expect("pick should open overlay");
            let chosen = result.chosen.expect("scaled draw can never miss");
            assert!(chosen == "A" || chosen == "B");
        }
        // Picking never mutates the option set
        assert_eq!(app.options, vec!["A", "B"]);
    }

    #[test]
    fn test_dismiss_clears_pick_result() {
        let mut app = app_with_options(&["A"]);
        update(&mut app, Action::PickRandom);
        assert!(app.pick_result.is_some());
        update(&mut app, Action::DismissPick);
        assert!(app.pick_result.is_none());
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_draw_index_scaled_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..10 {
            for _ in 0..100 {
                assert!(draw_index(len, DrawMode::Scaled, &mut rng) < len);
            }
        }
    }

    #[test]
    fn test_draw_index_fixed_uses_constant_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            // Range is 3 slots regardless of how many options exist
            assert!(draw_index(1, DrawMode::Fixed, &mut rng) < FIXED_DRAW_RANGE);
            assert!(draw_index(100, DrawMode::Fixed, &mut rng) < FIXED_DRAW_RANGE);
        }
    }

    #[test]
    fn test_fixed_mode_can_miss_short_sets() {
        // With one option and a 3-slot range, a miss must eventually occur.
        let mut app = app_with_options(&["A"]);
        app.draw_mode = DrawMode::Fixed;
        let mut saw_miss = false;
        for _ in 0..200 {
            update(&mut app, Action::PickRandom);
            if app.pick_result.take().expect("overlay opens").chosen.is_none() {
                saw_miss = true;
                break;
            }
        }
        assert!(saw_miss, "fixed 3-slot draw over 1 option never missed in 200 tries");
    }
}
