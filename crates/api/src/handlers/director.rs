//! Handlers for the `/directors` resource.

use axum::extract::State;
use axum::Json;
use cinema_db::models::director::Director;
use cinema_db::models::movie::MovieName;
use cinema_db::repositories::{DirectorRepo, MovieRepo};

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::state::AppState;

/// GET /directors/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// GET /directors/{director_id}/movies/
///
/// An unknown (or non-numeric) director id yields an empty list, not a 404.
pub async fn list_movies(
    State(state): State<AppState>,
    AppPath(director_id): AppPath<String>,
) -> AppResult<Json<Vec<MovieName>>> {
    let movies = MovieRepo::list_names_by_director(&state.pool, &director_id).await?;
    Ok(Json(movies))
}
