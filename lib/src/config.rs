use std::{fs, path::Path};

use n0_error::{Result, StackResultExt, StdResultExt};
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable that overrides [`Config::api_url`].
pub const API_URL_ENV: &str = "MONEYTIME_API_URL";

const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Base URL of the MoneyTime backend. Auth endpoints live under `{api_url}/auth/`.
    pub api_url: Url,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default api url is valid"),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = fs::read_to_string(path).context("reading config file")?;
        let config = serde_yml::from_str(&config).std_context("parsing config file")?;
        Ok(config)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = serde_yml::to_string(self).anyerr()?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Defaults, with the API URL taken from `MONEYTIME_API_URL` when set.
    ///
    /// In the browser there is no process environment and this always yields the defaults.
    pub fn from_env() -> Result<Self> {
        Self::with_api_url_override(std::env::var(API_URL_ENV).ok().as_deref())
    }

    fn with_api_url_override(value: Option<&str>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            config.api_url = Url::parse(value.trim())
                .with_std_context(|_| format!("parsing {API_URL_ENV}={value}"))?;
        }
        Ok(config)
    }

    /// Joins `path` onto the API base URL, tolerating a trailing slash on either side.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
