#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;
use yoga::router::init_router;
use yoga::state::AppState;
use yoga::yoga_auth::create_access_token;
use yoga::yoga_config::{CorsConfig, JwtConfig, RateLimitConfig};
use yoga::yoga_core::hash_password;

pub const TEST_PASSWORD: &str = "test!1234";

pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        expiry: 3600,
    }
}

pub fn test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        pool,
        test_jwt_config(),
        CorsConfig::from_origins("http://localhost:4200"),
        RateLimitConfig::default(),
    )
}

pub fn setup_test_app(pool: SqlitePool) -> Router {
    init_router(test_state(pool))
}

pub fn setup_test_app_with_rate_limit(pool: SqlitePool, rate_limit: RateLimitConfig) -> Router {
    let state = AppState::new(
        pool,
        test_jwt_config(),
        CorsConfig::from_origins("http://localhost:4200"),
        rate_limit,
    );
    init_router(state)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", &Uuid::new_v4().simple().to_string()[..12])
}

pub async fn create_test_user(pool: &SqlitePool, email: &str, admin: bool) -> TestUser {
    let hashed = hash_password(TEST_PASSWORD).unwrap();

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (first_name, last_name, email, password, admin)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind("Test")
    .bind("User")
    .bind(email)
    .bind(&hashed)
    .bind(admin)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        admin,
    }
}

pub async fn create_test_teacher(pool: &SqlitePool, first_name: &str, last_name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO teachers (first_name, last_name) VALUES ($1, $2) RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_session(
    pool: &SqlitePool,
    name: &str,
    teacher_id: Option<i64>,
    participants: &[i64],
) -> i64 {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO sessions (name, description, date, teacher_id)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(name)
    .bind("A session for every level")
    .bind(Utc::now() + Duration::days(7))
    .bind(teacher_id)
    .fetch_one(pool)
    .await
    .unwrap();

    for user_id in participants {
        sqlx::query("INSERT INTO participate (session_id, user_id) VALUES ($1, $2)")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await
            .unwrap();
    }

    id
}

pub async fn participant_ids(pool: &SqlitePool, session_id: i64) -> Vec<i64> {
    sqlx::query_scalar("SELECT user_id FROM participate WHERE session_id = $1 ORDER BY user_id")
        .bind(session_id)
        .fetch_all(pool)
        .await
        .unwrap()
}

pub fn token_for(user: &TestUser) -> String {
    create_access_token(
        user.id,
        &user.email,
        &user.first_name,
        &user.last_name,
        user.admin,
        &test_jwt_config(),
    )
    .unwrap()
}

/// Sends one request through the router and returns the status and the
/// JSON body (`Null` when the body is empty or not JSON).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
