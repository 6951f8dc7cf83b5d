//! Route definitions for the `/practices` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::practice;
use crate::state::AppState;

/// Routes mounted at `/practices`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /search/{term}      -> search
/// GET    /search/            -> search_empty
/// GET    /stats/summary      -> summary
/// GET    /{id}               -> get_by_id
/// DELETE /{id}               -> delete
/// ```
///
/// Static segments take priority over `{id}`, so `search` and `stats` are
/// never read as record ids.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(practice::list).post(practice::create))
        .route("/search/", get(practice::search_empty))
        .route("/search/{term}", get(practice::search))
        .route("/stats/summary", get(practice::summary))
        .route("/{id}", get(practice::get_by_id).delete(practice::delete))
}
