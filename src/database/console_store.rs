use crate::{
    database::record_store::{RecordStore, StoreResult},
    models::{
        achievement::{Achievement, NewAchievement},
        donation::{Donation, NewDonation},
        volunteer::{NewVolunteer, Volunteer},
    },
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Logs every record instead of persisting it.
///
/// Used when neither a database nor a hosted store is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleStore;

#[async_trait]
impl RecordStore for ConsoleStore {
    fn name(&self) -> &'static str {
        "console"
    }

    async fn insert_donation(&self, donation: NewDonation) -> StoreResult<Donation> {
        info!(
            name = %donation.name,
            email = %donation.email,
            amount = %donation.amount,
            donation_type = %donation.donation_type,
            message = ?donation.message,
            anonymous = donation.anonymous,
            "Donation data"
        );
        Ok(Donation::from_new(Uuid::new_v4(), Utc::now(), donation))
    }

    async fn insert_volunteer(&self, application: NewVolunteer) -> StoreResult<Volunteer> {
        info!(
            name = %application.name,
            email = %application.email,
            phone = %application.phone,
            address = %application.address,
            availability = %application.availability,
            status = ?application.status,
            "Volunteer application data"
        );
        Ok(Volunteer::from_new(Uuid::new_v4(), Utc::now(), application))
    }

    async fn insert_achievement(&self, achievement: NewAchievement) -> StoreResult<Achievement> {
        info!(title = %achievement.title, date = %achievement.date, "Achievement data");
        Ok(Achievement::from_new(Uuid::new_v4(), Utc::now(), achievement))
    }

    async fn list_achievements(&self) -> StoreResult<Vec<Achievement>> {
        Ok(Vec::new())
    }
}
