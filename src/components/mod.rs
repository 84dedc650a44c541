//! Leptos view components for the widget.

pub mod launcher;
pub mod panel;
