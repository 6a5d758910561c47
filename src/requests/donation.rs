use crate::{
    models::donation::{DonationFrequency, NewDonation},
    validation::{self, FieldErrors, Validate},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const NAME_MESSAGE: &str = "Name must be at least 2 characters.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const AMOUNT_MESSAGE: &str = "Please enter a valid donation amount.";
pub const FREQUENCY_MESSAGE: &str = "Please select a donation type.";
pub const TERMS_MESSAGE: &str = "You must agree to the terms and conditions.";

/// Donation form contents exactly as the browser posts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DonationRequest {
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "super::string_or_number")]
    pub amount: String,
    pub donation_type: String,
    pub message: Option<String>,
    pub anonymous: bool,
    pub agree_terms: bool,
}

impl Default for DonationRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            amount: String::new(),
            donation_type: DonationFrequency::default().as_str().to_string(),
            message: Some(String::new()),
            anonymous: false,
            agree_terms: false,
        }
    }
}

/// Largest amount a `NUMERIC(12, 2)` column holds.
pub fn max_amount() -> Decimal {
    Decimal::new(999_999_999_999, 2)
}

/// Whole cents only, positive and within the stored column's range.
fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok().filter(|amount| {
        amount.is_sign_positive()
            && !amount.is_zero()
            && amount.normalize().scale() <= 2
            && *amount <= max_amount()
    })
}

impl Validate for DonationRequest {
    type Record = NewDonation;

    fn validate(&self) -> Result<NewDonation, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = validation::min_chars(&self.name, 2);
        if name.is_none() {
            errors.add("name", NAME_MESSAGE);
        }

        let email = validation::email(&self.email);
        if email.is_none() {
            errors.add("email", EMAIL_MESSAGE);
        }

        let amount = parse_amount(&self.amount);
        if amount.is_none() {
            errors.add("amount", AMOUNT_MESSAGE);
        }

        let donation_type = DonationFrequency::from_str(self.donation_type.trim()).ok();
        if donation_type.is_none() {
            errors.add("donationType", FREQUENCY_MESSAGE);
        }

        if !self.agree_terms {
            errors.add("agreeTerms", TERMS_MESSAGE);
        }

        match (name, email, amount, donation_type) {
            (Some(name), Some(email), Some(amount), Some(donation_type)) => {
                errors.into_result(|| NewDonation {
                    name,
                    email,
                    amount,
                    donation_type,
                    message: validation::optional_text(self.message.as_deref()),
                    anonymous: self.anonymous,
                })
            }
            _ => Err(errors),
        }
    }
}
