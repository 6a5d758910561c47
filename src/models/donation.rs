use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Default)]
#[sqlx(type_name = "donation_frequency", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DonationFrequency {
    #[default]
    OneTime,
    Monthly,
    Annually,
}

impl DonationFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationFrequency::OneTime => "one-time",
            DonationFrequency::Monthly => "monthly",
            DonationFrequency::Annually => "annually",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DonationFrequency::OneTime => "One-time donation",
            DonationFrequency::Monthly => "Monthly donation",
            DonationFrequency::Annually => "Annual donation",
        }
    }
}

impl FromStr for DonationFrequency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-time" => Ok(DonationFrequency::OneTime),
            "monthly" => Ok(DonationFrequency::Monthly),
            "annually" => Ok(DonationFrequency::Annually),
            _ => Err(()),
        }
    }
}

impl fmt::Display for DonationFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A donation as stored in the `donations` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Donation {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub amount: Decimal,
    pub donation_type: DonationFrequency,
    pub message: Option<String>,
    pub anonymous: bool,
}

/// A validated donation, ready to hand to the record store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDonation {
    pub name: String,
    pub email: String,
    pub amount: Decimal,
    pub donation_type: DonationFrequency,
    pub message: Option<String>,
    pub anonymous: bool,
}

impl Donation {
    pub fn from_new(id: Uuid, created_at: DateTime<Utc>, donation: NewDonation) -> Self {
        Self {
            id,
            created_at,
            name: donation.name,
            email: donation.email,
            amount: donation.amount,
            donation_type: donation.donation_type,
            message: donation.message,
            anonymous: donation.anonymous,
        }
    }
}
