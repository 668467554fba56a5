//! Error type for the command-line front end.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Strava(#[from] strava_client::StravaError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Line printed to stderr before the process exits with a failure code.
    pub fn fatal_message(&self) -> String {
        match self {
            CliError::Strava(strava_client::StravaError::TokenExchange(msg)) => {
                format!("Error getting access token: {msg}")
            }
            other => format!("Error: {other}"),
        }
    }
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
