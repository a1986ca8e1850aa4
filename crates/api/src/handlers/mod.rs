//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `listings_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod listing;
