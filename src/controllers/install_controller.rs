use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::models::install::InstallRequest;
use crate::models::state::AppState;

/// `POST /install`: forward the named PKG file to the Remote PKG Installer
/// and relay the outcome.
///
/// A missing or empty `pkg_file` is a 400. A remote non-200 and any local
/// failure (file not found, console unreachable) both collapse to a 500;
/// they differ only in the error text.
#[tracing::instrument(skip(state))]
pub async fn install_handler(
    State(state): State<AppState>,
    Json(payload): Json<InstallRequest>,
) -> (StatusCode, Json<Value>) {
    let pkg_file: String = match payload.pkg_file {
        Some(name) if !name.is_empty() => name,
        _ => {
            warn!("Install request without a PKG file name");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No PKG file provided" })),
            );
        }
    };

    match state.installer.upload_pkg(&pkg_file).await {
        Ok(status) if status == reqwest::StatusCode::OK => (
            StatusCode::OK,
            Json(json!({ "message": "PKG installed successfully!" })),
        ),
        Ok(status) => {
            error!("Installer rejected '{}' with status {}", pkg_file, status);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to install PKG" })),
            )
        }
        Err(err) => {
            error!("Upload of '{}' failed: {:#}", pkg_file, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("{err:#}") })),
            )
        }
    }
}
