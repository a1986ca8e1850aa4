//! Dashboard components for managing listings.
//!
//! The table view and the create/edit forms hold the client-side state and
//! rules of the dashboard. They talk to the listings service through the
//! [`ListingsApi`](client::ListingsApi) trait and to the browser through
//! [`Interaction`](interaction::Interaction), and render themselves with
//! `maud`.

pub mod client;
pub mod create_form;
pub mod edit_form;
pub mod form;
pub mod interaction;
pub mod model;
pub mod render;
pub mod table;

/// Where the create form sends the browser after a successful save.
pub const DASHBOARD_PATH: &str = "/dashboard";
