//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/router concerns from state and page logic
//! to improve reuse and testability.

pub mod navigator;
pub mod routes;
