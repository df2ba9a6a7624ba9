/*
    * Defines the application's environment variables and provides a method
    * for loading them from the system (or .env) using dotenv.
*/

use std::borrow::Cow;
use anyhow::Result;
use dotenv::dotenv;
use tracing::warn;

#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
    pub installer_url: Cow<'static, str>,
    pub upload_timeout_seconds: u64,
}

/*
    * Load all environment variables or fall back to defaults where specified.
*/
impl EnvironmentVariables {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            environment: match dotenv::var("ENVIRONMENT") {
                Ok(env) => env.into(),
                Err(_) => {
                    warn!("Missing ENVIRONMENT, defaulting to 'development'");
                    "development".into()
                }
            },
            host: match dotenv::var("HOST") {
                Ok(host) => host.into(),
                Err(_) => "127.0.0.1".into(),
            },
            port: match dotenv::var("PORT") {
                Ok(port) => port.parse()?,
                Err(_) => 3000,
            },
            max_request_body_size: match dotenv::var("MAX_REQUEST_BODY_SIZE") {
                Ok(size) => size.parse()?,
                Err(_) => 2_097_152, // 2MB default
            },
            // The request timeout must outlive the outbound upload, which can
            // take a while for a console on wifi.
            default_timeout_seconds: match dotenv::var("DEFAULT_TIMEOUT_SECONDS") {
                Ok(seconds) => seconds.parse()?,
                Err(_) => 30,
            },
            installer_url: match dotenv::var("INSTALLER_URL") {
                Ok(url) => url.into(),
                Err(_) => {
                    warn!("Missing INSTALLER_URL, defaulting to 'http://192.168.1.58:12801'");
                    "http://192.168.1.58:12801".into()
                }
            },
            upload_timeout_seconds: match dotenv::var("UPLOAD_TIMEOUT_SECONDS") {
                Ok(seconds) => seconds.parse()?,
                Err(_) => 25,
            },
        })
    }
}
