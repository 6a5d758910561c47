use crate::{
    models::volunteer::{Availability, NewVolunteer, VolunteerStatus},
    validation::{self, FieldErrors, Validate},
};
use serde::{Deserialize, Serialize};

pub const NAME_MESSAGE: &str = "Name must be at least 2 characters.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number.";
pub const ADDRESS_MESSAGE: &str = "Please enter your full address.";
pub const EXPERIENCE_MESSAGE: &str = "Please provide details about your teaching experience.";
pub const AVAILABILITY_MESSAGE: &str = "Please select your availability.";
pub const MOTIVATION_MESSAGE: &str = "Please tell us why you want to volunteer with us.";
pub const TERMS_MESSAGE: &str = "You must agree to the terms and conditions.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolunteerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub experience: String,
    pub availability: String,
    pub motivation: String,
    pub agree_terms: bool,
}

impl Validate for VolunteerRequest {
    type Record = NewVolunteer;

    fn validate(&self) -> Result<NewVolunteer, FieldErrors> {
        let mut errors = FieldErrors::new();

        let mut required = |field: &'static str, value: Option<String>, message: &str| {
            if value.is_none() {
                errors.add(field, message);
            }
            value
        };

        let name = required("name", validation::min_chars(&self.name, 2), NAME_MESSAGE);
        let email = required("email", validation::email(&self.email), EMAIL_MESSAGE);
        let phone = required("phone", validation::min_chars(&self.phone, 10), PHONE_MESSAGE);
        let address = required(
            "address",
            validation::min_chars(&self.address, 5),
            ADDRESS_MESSAGE,
        );
        let experience = required(
            "experience",
            validation::min_chars(&self.experience, 10),
            EXPERIENCE_MESSAGE,
        );
        let motivation = required(
            "motivation",
            validation::min_chars(&self.motivation, 20),
            MOTIVATION_MESSAGE,
        );

        let availability = self.availability.trim().parse::<Availability>().ok();
        if availability.is_none() {
            errors.add("availability", AVAILABILITY_MESSAGE);
        }

        if !self.agree_terms {
            errors.add("agreeTerms", TERMS_MESSAGE);
        }

        match (name, email, phone, address, experience, availability, motivation) {
            (
                Some(name),
                Some(email),
                Some(phone),
                Some(address),
                Some(experience),
                Some(availability),
                Some(motivation),
            ) => errors.into_result(|| NewVolunteer {
                name,
                email,
                phone,
                address,
                experience,
                availability,
                motivation,
                status: VolunteerStatus::Pending,
            }),
            _ => Err(errors),
        }
    }
}
