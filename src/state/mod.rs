//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds who is signed in, `bootstrap` decides it on load, and
//! `resource` classifies ordinary data fetches for views.

pub mod bootstrap;
pub mod resource;
pub mod session;
