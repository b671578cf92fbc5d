//! Router assembly and store startup, shared by the binary and the tests.

use std::any::Any;

use axum::http::HeaderName;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::routes;
use crate::state::AppState;

/// Open the store and confirm it answers.
///
/// Any error here is fatal to the process: the server must not start
/// without its database.
pub async fn open_store(config: &ServerConfig) -> Result<cinema_db::DbPool, sqlx::Error> {
    let pool = cinema_db::create_pool(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Database connection pool created");

    cinema_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    Ok(pool)
}

/// Build the full application router with its middleware stack.
pub fn build_app(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::api_routes())
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: same 500 body as every other internal error.
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}
