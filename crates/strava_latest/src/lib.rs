//! Interactive front end: pick an activity type, look up the most recent
//! matching activity and print it.

use std::io::Write;

use chrono::TimeZone;
use strava_client::{ActivityLookup, ActivityType};
use tracing::{error, info};

pub mod display;
pub mod error;
pub mod prompt;

pub use error::{CliError, CliResult};

/// Default tracing filter when neither `STRAVA_LOG_LEVEL` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Build the tracing filter from `STRAVA_LOG_LEVEL`, falling back to
/// `RUST_LOG`, then to [`DEFAULT_LOG_FILTER`]. Invalid directives also fall
/// back to the default.
pub fn log_filter<F>(mut get: F) -> tracing_subscriber::EnvFilter
where
    F: FnMut(&str) -> Option<String>,
{
    let level = get("STRAVA_LOG_LEVEL")
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    tracing_subscriber::EnvFilter::try_new(&level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Look up and print the latest activity of `activity_type`.
///
/// Only fatal errors (token exchange) are returned; a failed or empty
/// lookup is reported on `err`/`out` and the run still succeeds.
pub async fn run<Tz, O, E>(
    lookup: &ActivityLookup,
    activity_type: ActivityType,
    tz: &Tz,
    out: &mut O,
    err: &mut E,
) -> CliResult<()>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
    O: Write,
    E: Write,
{
    info!("looking up latest {}", activity_type);
    match lookup.find_latest(activity_type).await {
        Ok(Some(activity)) => display::render_activity(&activity, tz, out)?,
        Ok(None) => display::render_not_found(activity_type, out)?,
        Err(e) if e.is_fatal() => return Err(e.into()),
        Err(e) => {
            error!("activity lookup failed: {}", e);
            display::render_failure(&e, err)?;
        }
    }
    Ok(())
}

/// Process exit code for the outcome of a whole invocation.
pub fn exit_code(result: &CliResult<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
