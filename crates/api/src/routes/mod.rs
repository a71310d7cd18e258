pub mod health;
pub mod series;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /series                       list, create
/// /series/{id}                  get, replace, delete
/// /series/{id}/status           set status
/// /series/{id}/episode          advance last watched episode
/// /series/{id}/upvote           ranking - 1
/// /series/{id}/downvote         ranking + 1
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/series", series::router())
}
