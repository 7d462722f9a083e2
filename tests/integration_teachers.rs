mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_test_teacher, create_test_user, generate_unique_email, send, setup_test_app, token_for,
};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "./migrations")]
async fn test_list_teachers(pool: SqlitePool) {
    let user = create_test_user(&pool, &generate_unique_email(), false).await;
    let first = create_test_teacher(&pool, "Margot", "Delahaye").await;
    let second = create_test_teacher(&pool, "Hélène", "Martin").await;
    let app = setup_test_app(pool);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/teacher",
        Some(&token_for(&user)),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let teachers = body.as_array().unwrap();
    assert_eq!(teachers.len(), 2);
    assert_eq!(teachers[0]["id"], first);
    assert_eq!(teachers[0]["lastName"], "Delahaye");
    assert_eq!(teachers[0]["firstName"], "Margot");
    assert_eq!(teachers[1]["id"], second);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_teacher(pool: SqlitePool) {
    let user = create_test_user(&pool, &generate_unique_email(), false).await;
    let teacher_id = create_test_teacher(&pool, "Margot", "Delahaye").await;
    let app = setup_test_app(pool);
    let token = token_for(&user);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/teacher/{}", teacher_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], teacher_id);
    assert_eq!(body["lastName"], "Delahaye");

    let (status, body) = send(&app, Method::GET, "/api/teacher/42", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Teacher with id 42 not found");

    let (status, _) = send(&app, Method::GET, "/api/teacher/one", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_teachers_require_token(pool: SqlitePool) {
    let teacher_id = create_test_teacher(&pool, "Margot", "Delahaye").await;
    let app = setup_test_app(pool);

    let (status, _) = send(&app, Method::GET, "/api/teacher", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/teacher/{}", teacher_id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
