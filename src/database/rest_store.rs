use crate::{
    database::record_store::{RecordStore, StoreError, StoreResult},
    models::{
        achievement::{Achievement, NewAchievement},
        donation::{Donation, NewDonation},
        volunteer::{NewVolunteer, Volunteer},
    },
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

const DONATIONS: &str = "donations";
const VOLUNTEERS: &str = "volunteers";
const ACHIEVEMENTS: &str = "achievements";

/// Client for the hosted record store's REST interface.
///
/// Tables are exposed under `{base_url}/rest/v1/{table}`; every request
/// carries the access key both as `apikey` and as a bearer token.
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn insert<T, R>(&self, table: &'static str, record: &T) -> StoreResult<R>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        debug!("Inserting into {} via {}", table, self.base_url);

        let response = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await?;

        let mut rows: Vec<R> = Self::check(table, response).await?.json().await?;
        if rows.is_empty() {
            return Err(StoreError::EmptyResponse { table });
        }
        Ok(rows.swap_remove(0))
    }

    async fn check(table: &str, response: Response) -> StoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        error!("Record store rejected {} request ({}): {}", table, status, message);
        Err(StoreError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RecordStore for RestStore {
    fn name(&self) -> &'static str {
        "rest"
    }

    async fn insert_donation(&self, donation: NewDonation) -> StoreResult<Donation> {
        self.insert(DONATIONS, &donation).await
    }

    async fn insert_volunteer(&self, application: NewVolunteer) -> StoreResult<Volunteer> {
        self.insert(VOLUNTEERS, &application).await
    }

    async fn insert_achievement(&self, achievement: NewAchievement) -> StoreResult<Achievement> {
        self.insert(ACHIEVEMENTS, &achievement).await
    }

    async fn list_achievements(&self) -> StoreResult<Vec<Achievement>> {
        let response = self
            .client
            .get(self.table_url(ACHIEVEMENTS))
            .query(&[("select", "*"), ("order", "date.desc")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let achievements = Self::check(ACHIEVEMENTS, response).await?.json().await?;
        Ok(achievements)
    }
}
