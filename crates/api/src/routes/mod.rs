pub mod directors;
pub mod movies;

use axum::routing::MethodRouter;
use axum::Router;

use crate::state::AppState;

/// Build the catalogue route tree.
///
/// ```text
/// /movies/                          list, create
/// /movies/{movie_id}/               get, update, delete
/// /directors/                       list
/// /directors/{director_id}/movies/  list movies by director
/// ```
///
/// Every path also answers without its trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(movies::router())
        .merge(directors::router())
}

/// Register `method_router` at `path` and at `path` minus its trailing slash.
pub(crate) fn route_with_optional_slash(
    router: Router<AppState>,
    path: &str,
    method_router: MethodRouter<AppState>,
) -> Router<AppState> {
    let bare = path.trim_end_matches('/');
    router
        .route(path, method_router.clone())
        .route(bare, method_router)
}
