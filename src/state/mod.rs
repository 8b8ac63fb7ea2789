//! Domain state shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data with mutating methods; the chat page wraps
//! them in signals and provides them via Leptos context.

pub mod chat;
