//! Route definitions for the `/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::listing;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(listing::list).post(listing::create))
        .route(
            "/{id}",
            get(listing::get_by_id)
                .patch(listing::update)
                .delete(listing::delete),
        )
}
