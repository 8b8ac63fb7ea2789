//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surface while reading/writing shared state
//! from Leptos context providers.

pub mod chat_panel;
pub mod message_view;
pub mod suggestion_grid;
