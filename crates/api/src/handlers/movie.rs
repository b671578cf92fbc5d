//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::Json;
use cinema_db::models::movie::{CreateMovie, Movie, MovieName, UpdateMovie};
use cinema_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// GET /movies/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MovieName>>> {
    let movies = MovieRepo::list_names(&state.pool).await?;
    Ok(Json(movies))
}

/// POST /movies/
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMovie>,
) -> AppResult<&'static str> {
    let movie_id = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id, director_id = input.director_id, "Movie created");
    Ok("Movie Successfully Added")
}

/// GET /movies/{movie_id}/
///
/// The id is passed to the store as received: a non-numeric id is a miss.
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::movie_not_found(&id))?;
    Ok(Json(movie))
}

/// PUT /movies/{movie_id}/
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(input): AppJson<UpdateMovie>,
) -> AppResult<&'static str> {
    if MovieRepo::update(&state.pool, &id, &input).await? {
        Ok("Movie Details Updated")
    } else {
        Err(AppError::movie_not_found(&id))
    }
}

/// DELETE /movies/{movie_id}/
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<&'static str> {
    let deleted = MovieRepo::delete(&state.pool, &id).await?;
    if deleted {
        tracing::info!(movie_id = %id, "Movie removed");
        Ok("Movie Removed")
    } else {
        Err(AppError::movie_not_found(&id))
    }
}
