//! HTTP client that authenticates every outbound request with a freshly
//! acquired bearer token.

use crate::{StravaError, TokenProvider};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct AuthenticatedClient {
    client: reqwest::Client,
    tokens: Arc<dyn TokenProvider>,
}

impl AuthenticatedClient {
    pub fn new(client: reqwest::Client, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { client, tokens }
    }

    /// Unauthenticated GET builder; the header is attached in [`Self::send`].
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url)
    }

    /// Acquire a token, attach `Authorization: Bearer <token>` and send.
    /// A token failure is returned as-is and the request is never sent.
    pub async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, StravaError> {
        let token = self.tokens.acquire().await?;
        let request = request.bearer_auth(token.access_token.expose_secret());
        debug!("sending authenticated request");
        request.send().await.map_err(StravaError::from_send)
    }

    /// Send and decode a JSON body, turning non-2xx statuses into
    /// [`StravaError::Response`].
    pub async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, StravaError> {
        let resp = self.send(request).await?;
        if !resp.status().is_success() {
            return Err(StravaError::from_response(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }
}

impl std::fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedClient").finish_non_exhaustive()
    }
}
