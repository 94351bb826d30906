pub mod health;
pub mod person;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pessoas                                         list, create
/// /pessoas/{id}                                    get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/pessoas", person::router())
}
