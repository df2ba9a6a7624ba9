/*
    * Payload types for the /install endpoint.
*/

use serde::Deserialize;

/// Body of `POST /install`. The file name points at a PKG on the host
/// running this service, not on the console.
#[derive(Debug, Deserialize)]
pub struct InstallRequest {
    pub pkg_file: Option<String>,
}
