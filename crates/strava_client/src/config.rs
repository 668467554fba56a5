use crate::StravaError;
use secrecy::SecretString;

pub const DEFAULT_BASE_URL: &str = "https://www.strava.com";

/// Refresh credential plus the host both endpoints live on. Built once at
/// startup and handed to the token provider and the client by reference.
#[derive(Clone, Debug)]
pub struct Config {
    pub client_id: String,
    pub client_secret: SecretString,
    pub refresh_token: SecretString,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, StravaError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function, so tests never touch the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, StravaError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut required = |key: &str| {
            get(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| StravaError::Config(format!("{key} missing")))
        };
        let client_id = required("STRAVA_CLIENT_ID")?;
        let client_secret = required("STRAVA_CLIENT_SECRET")?;
        let refresh_token = required("STRAVA_REFRESH_TOKEN")?;
        let base_url = get("STRAVA_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Ok(Self {
            client_id,
            client_secret: SecretString::new(client_secret.into()),
            refresh_token: SecretString::new(refresh_token.into()),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn token_url(&self) -> String {
        format!("{}/oauth/token", self.base_url)
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/v3{}", self.base_url, path)
    }
}
