//! Networking modules for the answering-service HTTP exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single `/chat` REST call and `types` defines the
//! shared wire schema. There is no other protocol: one JSON request and one
//! JSON response per user turn.

pub mod api;
pub mod types;
