//! # Core Application Logic
//!
//! The option list and everything that can happen to it. This module knows
//! nothing about terminals or any specific UI technology.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! - [`state`]: the `App` struct, sole owner of the option list
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`store`]: JSON persistence for the option list
//! - [`config`]: settings with defaults → file → env → CLI override order

pub mod action;
pub mod config;
pub mod state;
pub mod store;
