use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{find_all_teachers, find_teacher_by_id};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(find_all_teachers))
        .route("/{id}", get(find_teacher_by_id))
}
