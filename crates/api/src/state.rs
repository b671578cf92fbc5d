/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is a reference-counted handle to the single
/// store opened at startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinema_db::DbPool,
}
