//! Refresh-token exchange against the OAuth token endpoint.

use crate::{StravaError, config::Config};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

/// Credentials within this many seconds of expiry are treated as expired.
const EXPIRY_MARGIN_SECS: i64 = 300;

/// Short-lived bearer credential returned by the token endpoint.
#[derive(Clone, Debug)]
pub struct AccessToken {
    pub access_token: SecretString,
    /// Unix timestamp, when the server reports one.
    pub expires_at: Option<i64>,
}

impl AccessToken {
    pub fn new(access_token: impl Into<String>, expires_at: Option<i64>) -> Self {
        let token: String = access_token.into();
        Self {
            access_token: SecretString::new(token.into_boxed_str()),
            expires_at,
        }
    }

    /// Still usable at `now` with the expiry margin applied. A credential
    /// without an expiry is never considered fresh.
    pub fn is_fresh_at(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp - now >= EXPIRY_MARGIN_SECS)
    }
}

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn acquire(&self) -> Result<AccessToken, StravaError>;
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
    grant_type: &'a str,
}

/// Matches the fields of the token response this client cares about;
/// `token_type`, `expires_in` and the rotated `refresh_token` are ignored.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_at: Option<i64>,
}

/// Exchanges the configured refresh token for an access token on every call.
#[derive(Clone, Debug)]
pub struct OAuthTokenProvider {
    token_url: String,
    client_id: String,
    client_secret: SecretString,
    refresh_token: SecretString,
    client: reqwest::Client,
}

impl OAuthTokenProvider {
    pub fn new(config: &Config, client: reqwest::Client) -> Self {
        Self {
            token_url: config.token_url(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            refresh_token: config.refresh_token.clone(),
            client,
        }
    }
}

#[async_trait]
impl TokenProvider for OAuthTokenProvider {
    async fn acquire(&self) -> Result<AccessToken, StravaError> {
        debug!("exchanging refresh token at {}", self.token_url);
        let body = RefreshRequest {
            client_id: &self.client_id,
            client_secret: self.client_secret.expose_secret(),
            refresh_token: self.refresh_token.expose_secret(),
            grant_type: "refresh_token",
        };
        let resp = self
            .client
            .post(&self.token_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| StravaError::TokenExchange(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let snippet: String = text.chars().take(256).collect();
            return Err(StravaError::TokenExchange(format!(
                "status {}: {}",
                status.as_u16(),
                snippet
            )));
        }

        let parsed: TokenResponse = resp
            .json()
            .await
            .map_err(|e| StravaError::TokenExchange(format!("invalid token response: {e}")))?;
        Ok(AccessToken::new(parsed.access_token, parsed.expires_at))
    }
}

/// Reuses the last credential until it nears `expires_at`, then exchanges
/// again through the wrapped provider.
pub struct CachingTokenProvider<P> {
    inner: P,
    cached: Mutex<Option<AccessToken>>,
}

impl<P: TokenProvider> CachingTokenProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cached: Mutex::new(None),
        }
    }
}

#[async_trait]
impl<P: TokenProvider> TokenProvider for CachingTokenProvider<P> {
    async fn acquire(&self) -> Result<AccessToken, StravaError> {
        let mut cached = self.cached.lock().await;
        let now = chrono::Utc::now().timestamp();
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh_at(now)) {
            debug!("reusing cached access token");
            return Ok(token.clone());
        }
        let token = self.inner.acquire().await?;
        *cached = Some(token.clone());
        Ok(token)
    }
}
