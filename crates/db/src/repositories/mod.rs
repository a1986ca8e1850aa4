//! Repositories: one zero-sized struct per table exposing async CRUD
//! functions that take the pool explicitly.

pub mod listing_repo;

pub use listing_repo::ListingRepo;
