//! Repository for the `director` table.

use sqlx::SqlitePool;

use crate::models::director::Director;

/// Read access to directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// List every director in storage order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>("SELECT director_id, director_name FROM director")
            .fetch_all(pool)
            .await
    }
}
