//! Shared domain types, errors and field validation for the listings service.
//!
//! This crate has no I/O: it is used by the store adapter, the HTTP layer
//! and the dashboard alike.

pub mod error;
pub mod listing;
pub mod types;
