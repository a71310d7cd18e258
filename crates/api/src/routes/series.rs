//! Route definitions for series.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::series;
use crate::state::AppState;

/// Routes mounted at `/series`.
///
/// ```text
/// GET    /                 -> list (?search=&status=&sort=asc|desc)
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// PATCH  /{id}/status      -> update_status
/// PATCH  /{id}/episode     -> increment_episode
/// PATCH  /{id}/upvote      -> upvote
/// PATCH  /{id}/downvote    -> downvote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(series::list).post(series::create))
        .route(
            "/{id}",
            get(series::get_by_id)
                .put(series::update)
                .delete(series::delete),
        )
        .route("/{id}/status", patch(series::update_status))
        .route("/{id}/episode", patch(series::increment_episode))
        .route("/{id}/upvote", patch(series::upvote))
        .route("/{id}/downvote", patch(series::downvote))
}
