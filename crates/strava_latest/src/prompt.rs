use dialoguer::{Select, theme::ColorfulTheme};
use strava_client::ActivityType;

use crate::error::CliResult;

pub const PROMPT_MESSAGE: &str = "What activity would you like to find most-recent data about?";

/// Ask which activity type to look up. `None` when the user cancels.
pub fn select_activity_type() -> CliResult<Option<ActivityType>> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(PROMPT_MESSAGE)
        .items(&ActivityType::ALL)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|i| ActivityType::ALL[i]))
}
