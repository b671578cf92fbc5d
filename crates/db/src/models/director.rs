//! Director entity model.

use cinema_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `director` table. Read-only for this service.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    pub director_id: DbId,
    pub director_name: String,
}
