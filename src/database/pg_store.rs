use crate::{
    database::{
        connection::DbPool,
        record_store::{RecordStore, StoreResult},
    },
    models::{
        achievement::{Achievement, NewAchievement},
        donation::{Donation, NewDonation},
        volunteer::{NewVolunteer, Volunteer},
    },
};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

/// Appends records straight into the store's Postgres database.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn insert_donation(&self, donation: NewDonation) -> StoreResult<Donation> {
        let donation = sqlx::query_as::<_, Donation>(
            "INSERT INTO donations (id, created_at, name, email, amount, donation_type, message, anonymous)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(Utc::now())
        .bind(donation.name)
        .bind(donation.email)
        .bind(donation.amount)
        .bind(donation.donation_type)
        .bind(donation.message)
        .bind(donation.anonymous)
        .fetch_one(&self.pool)
        .await?;

        Ok(donation)
    }

    async fn insert_volunteer(&self, application: NewVolunteer) -> StoreResult<Volunteer> {
        let volunteer = sqlx::query_as::<_, Volunteer>(
            "INSERT INTO volunteers (id, created_at, name, email, phone, address, experience, availability, motivation, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(Utc::now())
        .bind(application.name)
        .bind(application.email)
        .bind(application.phone)
        .bind(application.address)
        .bind(application.experience)
        .bind(application.availability)
        .bind(application.motivation)
        .bind(application.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(volunteer)
    }

    async fn insert_achievement(&self, achievement: NewAchievement) -> StoreResult<Achievement> {
        let achievement = sqlx::query_as::<_, Achievement>(
            "INSERT INTO achievements (id, created_at, title, description, date, image_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(Utc::now())
        .bind(achievement.title)
        .bind(achievement.description)
        .bind(achievement.date)
        .bind(achievement.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(achievement)
    }

    async fn list_achievements(&self) -> StoreResult<Vec<Achievement>> {
        let achievements =
            sqlx::query_as::<_, Achievement>("SELECT * FROM achievements ORDER BY date DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(achievements)
    }
}
