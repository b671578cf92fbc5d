use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinema_core::error::CoreError;

/// Body sent with every 500 response. Causes are logged, never returned.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Application-level error type for HTTP handlers.
///
/// Every route funnels its failures through this type, so the 404/500
/// mapping lives in exactly one place: [`IntoResponse`] below. Responses are
/// plain text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinema_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for the not-found error of a movie id.
    pub fn movie_not_found(id: &str) -> Self {
        AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: id.to_string(),
        })
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InternalError(format!("rejected request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InternalError(format!("rejected path: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity = %entity, id = %id, "Entity not found");
                (StatusCode::NOT_FOUND, format!("{entity} Not Found")).into_response()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
}
