/*
    * HTTP client for the Remote PKG Installer. The installer accepts a plain
    * multipart POST with a single `file` field and answers with a bare
    * status code; we only relay that status, never the body.
*/

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use tracing::{debug, info};

use crate::models::env_vars::EnvironmentVariables;

#[derive(Clone, Debug)]
pub struct InstallerClient {
    http: reqwest::Client,
    url: String,
}

impl InstallerClient {
    pub fn new(env: &EnvironmentVariables) -> Result<Self> {
        let http: reqwest::Client = reqwest::Client::builder()
            .timeout(Duration::from_secs(env.upload_timeout_seconds))
            .build()
            .context("Failed to build installer HTTP client")?;

        Ok(Self {
            http,
            url: env.installer_url.to_string(),
        })
    }

    /// Reads the named PKG file from local disk and POSTs it to the
    /// installer as multipart form data. Returns the remote status code;
    /// any local failure (unreadable file, unreachable console) is an `Err`.
    pub async fn upload_pkg(&self, pkg_file: &str) -> Result<StatusCode> {
        let bytes: Vec<u8> = tokio::fs::read(pkg_file)
            .await
            .with_context(|| format!("Failed to read PKG file '{pkg_file}'"))?;

        info!("Uploading '{}' ({} bytes) to {}", pkg_file, bytes.len(), self.url);

        let part: Part = Part::bytes(bytes).file_name(pkg_file.to_owned());
        let form: Form = Form::new().part("file", part);

        let response: reqwest::Response = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .context("Failed to reach the installer")?;

        debug!("Installer answered {} for '{}'", response.status(), pkg_file);

        Ok(response.status())
    }
}
