#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use cinema_api::app::build_app;
use cinema_api::state::AppState;
use cinema_db::DbPool;

const SCHEMA: &str = include_str!("../../../../db/fixtures/schema.sql");

/// A fresh in-memory store with the catalogue schema loaded.
///
/// One connection that never idles out, so the database lives as long as
/// the pool does.
pub async fn test_pool() -> DbPool {
    let options = cinema_db::connect_options("sqlite::memory:").unwrap();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();
    pool
}

/// Build the production router (same middleware stack as `main.rs`) over
/// the given pool.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app(AppState { pool })
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

pub async fn seed_director(pool: &DbPool, name: &str) -> i64 {
    sqlx::query("INSERT INTO director (director_name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn seed_movie(pool: &DbPool, director_id: i64, name: &str, actor: &str) -> i64 {
    sqlx::query("INSERT INTO movie (director_id, movie_name, lead_actor) VALUES (?, ?, ?)")
        .bind(director_id)
        .bind(name)
        .bind(actor)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
