//! Networking modules for the GraphQL API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves bytes, `gateway` turns them into typed responses and
//! normalized errors, `graphql` defines the envelope, and `operations` plus
//! `types` describe the documents the dashboard sends.

pub mod gateway;
pub mod graphql;
pub mod operations;
pub mod transport;
pub mod types;
