use axum::{routing::get, Router};

use crate::controllers::ping::ping_handler;
use crate::models::state::AppState;

pub fn ping_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping_handler))
}
