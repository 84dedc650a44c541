//! Client-side widget state.
//!
//! DESIGN
//! ======
//! All state transitions are synchronous methods on [`widget::WidgetState`]
//! so the open/close/send lifecycle can be unit tested without a browser.
//! Components hold the state in an `RwSignal` and re-render from it.

pub mod widget;
