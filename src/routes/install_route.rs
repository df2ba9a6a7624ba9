/*
    * This file defines the route(s) for the "install" endpoint.
    * We register one POST route at `/install` that calls `install_handler`.
*/

use axum::{routing::post, Router};

use crate::controllers::install_controller::install_handler;
use crate::models::state::AppState;

pub fn install_routes() -> Router<AppState> {
    Router::new()
        .route("/install", post(install_handler))
}
