use std::io::Write;

use strava_client::{ActivityLookup, Config};
use strava_latest::{CliResult, exit_code, log_filter, prompt, run};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A missing .env file is fine; the variables may come from the shell.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(log_filter(|k| std::env::var(k).ok()))
        .init();

    let result = start().await;
    if let Err(e) = &result {
        tracing::error!("strava-latest: {}", e);
        let _ = writeln!(std::io::stderr(), "{}", e.fatal_message());
    }
    std::process::exit(exit_code(&result));
}

async fn start() -> CliResult<()> {
    let config = Config::from_env()?;

    let Some(activity_type) = prompt::select_activity_type()? else {
        tracing::info!("strava-latest: selection cancelled");
        return Ok(());
    };

    let lookup = ActivityLookup::with_oauth(&config);
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run(
        &lookup,
        activity_type,
        &chrono::Local,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
    .await
}
