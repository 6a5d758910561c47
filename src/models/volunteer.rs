use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "volunteer_availability", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    WeekdayMornings,
    WeekdayAfternoons,
    WeekdayEvenings,
    Weekends,
    Flexible,
}

impl Availability {
    pub const ALL: [Availability; 5] = [
        Availability::WeekdayMornings,
        Availability::WeekdayAfternoons,
        Availability::WeekdayEvenings,
        Availability::Weekends,
        Availability::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::WeekdayMornings => "weekday_mornings",
            Availability::WeekdayAfternoons => "weekday_afternoons",
            Availability::WeekdayEvenings => "weekday_evenings",
            Availability::Weekends => "weekends",
            Availability::Flexible => "flexible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::WeekdayMornings => "Weekday Mornings",
            Availability::WeekdayAfternoons => "Weekday Afternoons",
            Availability::WeekdayEvenings => "Weekday Evenings",
            Availability::Weekends => "Weekends",
            Availability::Flexible => "Flexible",
        }
    }
}

impl FromStr for Availability {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Availability::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Default)]
#[sqlx(type_name = "volunteer_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VolunteerStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A volunteer application as stored in the `volunteers` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Volunteer {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub experience: String,
    pub availability: Availability,
    pub motivation: String,
    pub status: VolunteerStatus,
}

/// A validated application. New applications always enter as `pending`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewVolunteer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub experience: String,
    pub availability: Availability,
    pub motivation: String,
    pub status: VolunteerStatus,
}

impl Volunteer {
    pub fn from_new(id: Uuid, created_at: DateTime<Utc>, application: NewVolunteer) -> Self {
        Self {
            id,
            created_at,
            name: application.name,
            email: application.email,
            phone: application.phone,
            address: application.address,
            experience: application.experience,
            availability: application.availability,
            motivation: application.motivation,
            status: application.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_round_trips_every_tag() {
        for slot in Availability::ALL {
            assert_eq!(slot.as_str().parse::<Availability>(), Ok(slot));
        }
        assert!("mornings".parse::<Availability>().is_err());
        assert!("".parse::<Availability>().is_err());
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(VolunteerStatus::default(), VolunteerStatus::Pending);
        assert_eq!(
            serde_json::to_string(&VolunteerStatus::Pending).unwrap(),
            "\"pending\""
        );
    }
}
