use crate::models::{
    achievement::{Achievement, NewAchievement},
    donation::{Donation, NewDonation},
    volunteer::{NewVolunteer, Volunteer},
};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Record store request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Record store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Record store returned no row for {table}")]
    EmptyResponse { table: &'static str },
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// External record store the site appends form records to.
///
/// The store is never consulted during validation; it only receives
/// validated records and serves the achievements list.
#[async_trait]
pub trait RecordStore: Send + Sync {
    fn name(&self) -> &'static str;

    async fn insert_donation(&self, donation: NewDonation) -> StoreResult<Donation>;

    async fn insert_volunteer(&self, application: NewVolunteer) -> StoreResult<Volunteer>;

    async fn insert_achievement(&self, achievement: NewAchievement) -> StoreResult<Achievement>;

    /// All achievements, most recent `date` first.
    async fn list_achievements(&self) -> StoreResult<Vec<Achievement>>;
}
