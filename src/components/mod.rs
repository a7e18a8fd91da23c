//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components read shared state from context (`SessionStore`, `Gateway`) and
//! keep their decision logic in plain functions that are unit-tested natively.

pub mod content_lists;
pub mod dashboard_shell;
pub mod fetch_alert;
pub mod logout_button;
pub mod product_table;
pub mod session_bootstrap;
