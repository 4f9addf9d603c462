//! # premium-ui
//!
//! Presentation-independent UI logic.
//!
//! - [`state`]: immutable [`UiState`] and the [`reduce`] transition function.
//! - [`session`]: owns the state, runs requests off the caller's thread, and
//!   keeps at most one request in flight.
//! - [`display`]: renders a state to plain text.

pub mod display;
pub mod session;
pub mod state;

pub use display::{render_panel, render_result};
pub use session::Session;
pub use state::{reduce, Effect, Transition, UiEvent, UiState};
