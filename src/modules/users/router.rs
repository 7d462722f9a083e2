use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{delete_user, find_user_by_id};

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/{id}", get(find_user_by_id).delete(delete_user))
}
