//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use super::route_with_optional_slash;
use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /movies/              -> list
/// POST   /movies/              -> create
/// GET    /movies/{movie_id}/   -> get_by_id
/// PUT    /movies/{movie_id}/   -> update
/// DELETE /movies/{movie_id}/   -> delete
/// ```
pub fn router() -> Router<AppState> {
    let router = route_with_optional_slash(
        Router::new(),
        "/movies/",
        get(movie::list).post(movie::create),
    );
    route_with_optional_slash(
        router,
        "/movies/{movie_id}/",
        get(movie::get_by_id)
            .put(movie::update)
            .delete(movie::delete),
    )
}
