use crate::{
    Activity, ActivityType, AuthenticatedClient, OAuthTokenProvider, StravaError, config::Config,
};
use std::sync::Arc;
use tracing::debug;

/// Page size of the single list request; older activities are never searched.
pub const ACTIVITIES_PER_PAGE: u32 = 10;

#[derive(Clone, Debug)]
pub struct ActivityLookup {
    activities_url: String,
    client: AuthenticatedClient,
}

impl ActivityLookup {
    pub fn new(config: &Config, client: AuthenticatedClient) -> Self {
        Self {
            activities_url: config.api_url("/athlete/activities"),
            client,
        }
    }

    /// Lookup backed by a fresh reqwest client and the OAuth refresh flow,
    /// exchanging the refresh token once per request.
    pub fn with_oauth(config: &Config) -> Self {
        let http = reqwest::Client::new();
        let tokens = Arc::new(OAuthTokenProvider::new(config, http.clone()));
        Self::new(config, AuthenticatedClient::new(http, tokens))
    }

    /// Fetch the athlete's most recent activities, newest first.
    pub async fn recent_activities(&self) -> Result<Vec<Activity>, StravaError> {
        let request = self
            .client
            .get(&self.activities_url)
            .query(&[("per_page", ACTIVITIES_PER_PAGE)]);
        self.client.execute_json(request).await
    }

    /// First activity of the given type among the recent page, if any.
    pub async fn find_latest(
        &self,
        activity_type: ActivityType,
    ) -> Result<Option<Activity>, StravaError> {
        let activities = self.recent_activities().await?;
        debug!(
            "searching {} recent activities for {}",
            activities.len(),
            activity_type
        );
        Ok(first_of_type(activities, activity_type))
    }
}

pub fn first_of_type(activities: Vec<Activity>, activity_type: ActivityType) -> Option<Activity> {
    activities.into_iter().find(|a| a.is(activity_type))
}
