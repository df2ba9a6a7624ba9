pub mod app;
pub mod controllers;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

pub use crate::models::env_vars::EnvironmentVariables;
pub use crate::models::state::AppState;
