//! HTTP-level integration tests for the `/directors` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, get};
use serde_json::json;

#[tokio::test]
async fn list_directors_on_empty_store_returns_empty_array() {
    let pool = common::test_pool().await;
    let app = common::build_test_app(pool);

    let response = get(app, "/directors/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn list_directors_uses_wire_names() {
    let pool = common::test_pool().await;
    let id = common::seed_director(&pool, "Chantal Akerman").await;
    let app = common::build_test_app(pool);

    let response = get(app, "/directors/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{"directorId": id, "directorName": "Chantal Akerman"}])
    );
}

#[tokio::test]
async fn list_movies_by_director_filters_by_director() {
    let pool = common::test_pool().await;
    let lynch = common::seed_director(&pool, "David Lynch").await;
    let lean = common::seed_director(&pool, "David Lean").await;
    common::seed_movie(&pool, lynch, "Eraserhead", "Jack Nance").await;
    common::seed_movie(&pool, lean, "Lawrence of Arabia", "Peter O'Toole").await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/directors/{lynch}/movies/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{"movieName": "Eraserhead"}])
    );
}

#[tokio::test]
async fn list_movies_by_unknown_director_returns_empty_array() {
    let pool = common::test_pool().await;
    let app = common::build_test_app(pool);

    let response = get(app, "/directors/7/movies/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn list_movies_by_non_numeric_director_returns_empty_array() {
    let pool = common::test_pool().await;
    let director = common::seed_director(&pool, "Wong Kar-wai").await;
    common::seed_movie(&pool, director, "In the Mood for Love", "Tony Leung").await;
    let app = common::build_test_app(pool);

    let response = get(app, "/directors/abc/movies/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn list_movies_by_director_without_trailing_slash() {
    let pool = common::test_pool().await;
    let director = common::seed_director(&pool, "Hayao Miyazaki").await;
    common::seed_movie(&pool, director, "Spirited Away", "Rumi Hiiragi").await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/directors/{director}/movies")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{"movieName": "Spirited Away"}])
    );
}

#[tokio::test]
async fn list_directors_with_missing_table_returns_500() {
    let pool = common::test_pool().await;
    sqlx::query("DROP TABLE director")
        .execute(&pool)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = get(app, "/directors/").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Internal Server Error");
}
