//! Repository for the `movie` table.
//!
//! Lookups by id take the key as received (`&str`) and bind it unchanged;
//! see the crate docs for how SQLite compares it against `movie_id`.

use sqlx::SqlitePool;

use cinema_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, MovieName, UpdateMovie};

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List the name of every movie.
    pub async fn list_names(pool: &SqlitePool) -> Result<Vec<MovieName>, sqlx::Error> {
        sqlx::query_as::<_, MovieName>("SELECT movie_name FROM movie")
            .fetch_all(pool)
            .await
    }

    /// List the names of movies whose `director_id` matches. The director
    /// itself is not looked up.
    pub async fn list_names_by_director(
        pool: &SqlitePool,
        director_id: &str,
    ) -> Result<Vec<MovieName>, sqlx::Error> {
        sqlx::query_as::<_, MovieName>("SELECT movie_name FROM movie WHERE director_id = ?")
            .bind(director_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new movie, returning the id the store assigned to it.
    pub async fn create(pool: &SqlitePool, input: &CreateMovie) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO movie (director_id, movie_name, lead_actor)
             VALUES (?, ?, ?)",
        )
        .bind(input.director_id)
        .bind(&input.movie_name)
        .bind(&input.lead_actor)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Find a movie by id.
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "SELECT movie_id, director_id, movie_name, lead_actor
             FROM movie
             WHERE movie_id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Overwrite all mutable fields of a movie in one statement.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        input: &UpdateMovie,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movie
             SET director_id = ?, movie_name = ?, lead_actor = ?
             WHERE movie_id = ?",
        )
        .bind(input.director_id)
        .bind(&input.movie_name)
        .bind(&input.lead_actor)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a movie by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE movie_id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
