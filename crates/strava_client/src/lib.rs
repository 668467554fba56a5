//! Minimal Strava API client: refresh-token exchange, bearer-authenticated
//! requests and the recent-activity lookup.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

pub mod activities;
pub mod auth_client;
pub mod config;
pub mod token;
pub mod utils;

pub use activities::{ACTIVITIES_PER_PAGE, ActivityLookup};
pub use auth_client::AuthenticatedClient;
pub use config::Config;
pub use token::{AccessToken, CachingTokenProvider, OAuthTokenProvider, TokenProvider};

#[derive(Debug, Error)]
pub enum StravaError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("token exchange failed: {0}")]
    TokenExchange(String),
    #[error("response error: status {status}: {body}")]
    Response { status: u16, body: String },
    #[error("request error: {0}")]
    Request(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl StravaError {
    /// Errors after which nothing useful can be done in this invocation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StravaError::Config(_) | StravaError::TokenExchange(_))
    }

    /// Classify an error raised while sending a request: no response at all
    /// (connect, timeout) versus anything else the HTTP layer reports.
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            StravaError::Request(err.to_string())
        } else {
            StravaError::Http(err)
        }
    }

    pub(crate) async fn from_response(resp: reqwest::Response) -> Self {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body: String = body.chars().take(256).collect();
        StravaError::Response { status, body }
    }
}

/// Activity categories offered by the CLI menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivityType {
    Walk,
    Run,
    Ride,
    WeightTraining,
}

impl ActivityType {
    pub const ALL: [ActivityType; 4] = [
        ActivityType::Walk,
        ActivityType::Run,
        ActivityType::Ride,
        ActivityType::WeightTraining,
    ];

    /// Spelling used by the API's `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Walk => "Walk",
            ActivityType::Run => "Run",
            ActivityType::Ride => "Ride",
            ActivityType::WeightTraining => "WeightTraining",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActivityType {
    type Err = StravaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| StravaError::Config(format!("unknown activity type: {s}")))
    }
}

/// One entry of `GET /athlete/activities`. Only the fields the summary needs
/// are kept; the rest of the payload is ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub start_date: String,
}

impl Activity {
    pub fn is(&self, activity_type: ActivityType) -> bool {
        self.kind == activity_type.as_str()
    }
}
