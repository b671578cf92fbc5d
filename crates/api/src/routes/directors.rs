//! Route definitions for the `/directors` resource.

use axum::routing::get;
use axum::Router;

use super::route_with_optional_slash;
use crate::handlers::director;
use crate::state::AppState;

/// Routes mounted at `/directors`.
///
/// ```text
/// GET /directors/                         -> list
/// GET /directors/{director_id}/movies/    -> list_movies
/// ```
pub fn router() -> Router<AppState> {
    let router = route_with_optional_slash(Router::new(), "/directors/", get(director::list));
    route_with_optional_slash(
        router,
        "/directors/{director_id}/movies/",
        get(director::list_movies),
    )
}
