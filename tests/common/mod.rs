use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use hope_portal::{
    database::{RecordStore, StoreError, StoreResult},
    models::{
        achievement::{Achievement, NewAchievement},
        donation::{Donation, NewDonation},
        volunteer::{NewVolunteer, Volunteer},
    },
};
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory store that records every insert and can be switched offline.
#[derive(Default)]
pub struct RecordingStore {
    pub offline: bool,
    pub donations: Mutex<Vec<Donation>>,
    pub volunteers: Mutex<Vec<Volunteer>>,
    pub achievements: Mutex<Vec<Achievement>>,
}

impl RecordingStore {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    pub fn with_achievements(achievements: Vec<Achievement>) -> Self {
        Self {
            achievements: Mutex::new(achievements),
            ..Default::default()
        }
    }

    fn check(&self) -> StoreResult<()> {
        if self.offline {
            Err(StoreError::Unavailable("store offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordStore for RecordingStore {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn insert_donation(&self, donation: NewDonation) -> StoreResult<Donation> {
        self.check()?;
        let donation = Donation::from_new(Uuid::new_v4(), Utc::now(), donation);
        self.donations.lock().unwrap().push(donation.clone());
        Ok(donation)
    }

    async fn insert_volunteer(&self, application: NewVolunteer) -> StoreResult<Volunteer> {
        self.check()?;
        let volunteer = Volunteer::from_new(Uuid::new_v4(), Utc::now(), application);
        self.volunteers.lock().unwrap().push(volunteer.clone());
        Ok(volunteer)
    }

    async fn insert_achievement(&self, achievement: NewAchievement) -> StoreResult<Achievement> {
        self.check()?;
        let achievement = Achievement::from_new(Uuid::new_v4(), Utc::now(), achievement);
        self.achievements.lock().unwrap().push(achievement.clone());
        Ok(achievement)
    }

    async fn list_achievements(&self) -> StoreResult<Vec<Achievement>> {
        self.check()?;
        let mut achievements = self.achievements.lock().unwrap().clone();
        achievements.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(achievements)
    }
}

pub fn achievement(title: &str, date: &str) -> Achievement {
    Achievement {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        title: title.to_string(),
        description: format!("{} description", title),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        image_url: None,
    }
}
