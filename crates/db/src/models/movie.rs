//! Movie entity model and DTOs.

use cinema_core::types::DbId;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A full row from the `movie` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_id: DbId,
    pub director_id: DbId,
    pub movie_name: String,
    pub lead_actor: String,
}

/// Name-only projection returned by the movie listings.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieName {
    pub movie_name: String,
}

/// DTO for creating a new movie.
///
/// `director_id` is stored as given; it is not checked against `director`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    #[serde(deserialize_with = "deserialize_director_id")]
    pub director_id: DbId,
    pub movie_name: String,
    pub lead_actor: String,
}

/// DTO for replacing a movie's details. All fields are required and are
/// written together.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovie {
    #[serde(deserialize_with = "deserialize_director_id")]
    pub director_id: DbId,
    pub movie_name: String,
    pub lead_actor: String,
}

/// A director id as clients send it: a JSON number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum DirectorIdInput {
    Number(DbId),
    Text(String),
}

/// Coerce `"3"` to `3` the way the store's `INTEGER` column would.
fn deserialize_director_id<'de, D>(deserializer: D) -> Result<DbId, D::Error>
where
    D: Deserializer<'de>,
{
    match DirectorIdInput::deserialize(deserializer)? {
        DirectorIdInput::Number(id) => Ok(id),
        DirectorIdInput::Text(raw) => raw
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("directorId is not an integer: {raw:?}"))),
    }
}
