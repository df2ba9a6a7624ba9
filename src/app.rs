/*
    * Router assembly. Shared between main() and the integration tests so
    * both run the exact same middleware stack.
*/

use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    middleware::from_fn,
    Router,
};
use tower::{timeout::TimeoutLayer, ServiceBuilder};

use crate::middlewares::{response_logger::response_logger, start_time::start_time_middleware};
use crate::models::state::AppState;
use crate::routes::{install_route::install_routes, ping_route::ping_routes};
use crate::utils::error_handling::handle_global_error;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(install_routes())
        .merge(ping_routes())
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(state.env.max_request_body_size))
                .layer(from_fn(start_time_middleware))
                .layer(from_fn(response_logger))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    state.env.default_timeout_seconds,
                ))),
        )
        .with_state(state)
}
