pub mod health;
pub mod practice;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /practices                          list, create
/// /practices/{id}                     get, delete
/// /practices/search/{term}            case-insensitive search
/// /practices/search/                  search with an empty term (all)
/// /practices/stats/summary            aggregate counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/practices", practice::router())
}
