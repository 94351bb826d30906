//! Route definitions for the person registry.

use axum::routing::get;
use axum::Router;

use crate::handlers::person;
use crate::state::AppState;

/// Person routes mounted at `/pessoas`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(person::list).post(person::create))
        .route(
            "/{id}",
            get(person::get_by_id)
                .put(person::update)
                .delete(person::delete),
        )
}
