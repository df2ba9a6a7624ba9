use crate::models::env_vars::EnvironmentVariables;
use crate::services::installer::InstallerClient;

#[derive(Clone, Debug)]
pub struct AppState {
    pub env: EnvironmentVariables,
    pub installer: InstallerClient,
}

impl AppState {
    pub fn from_env() -> anyhow::Result<Self> {
        let env: EnvironmentVariables = EnvironmentVariables::from_env()?;
        Self::new(env)
    }

    /// Build the state from explicit configuration. Tests use this to point
    /// the installer client at a stub server.
    pub fn new(env: EnvironmentVariables) -> anyhow::Result<Self> {
        let installer: InstallerClient = InstallerClient::new(&env)?;
        Ok(Self { env, installer })
    }
}
