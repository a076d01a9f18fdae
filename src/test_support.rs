//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::{App, DrawMode};

/// Creates a test App with default copy and no options.
pub fn test_app() -> App {
    App::new(
        "Choices".to_string(),
        "Put your life in my hands".to_string(),
        DrawMode::Scaled,
    )
}

/// Creates a test App pre-populated with the given options.
pub fn app_with_options(options: &[&str]) -> App {
    let mut app = test_app();
    app.options = options.iter().map(|o| o.to_string()).collect();
    app
}
