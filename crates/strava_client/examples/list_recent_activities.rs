use strava_client::{ActivityLookup, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::from_env()?;
    let lookup = ActivityLookup::with_oauth(&cfg);

    let activities = lookup
        .recent_activities()
        .await
        .map_err(|e| format!("failed to fetch activities: {}", e))?;

    if activities.is_empty() {
        println!("No recent activities returned (check credentials or scopes)");
        return Ok(());
    }

    println!("Recent activities:");
    for a in activities {
        println!("- {} [{}] {}", a.start_date, a.kind, a.name);
    }

    Ok(())
}
