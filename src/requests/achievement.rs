use crate::{
    models::achievement::NewAchievement,
    validation::{self, FieldErrors, Validate},
};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateAchievementRequest {
    pub title: String,
    pub description: String,
    pub date: String,
    pub image_url: Option<String>,
}

impl Validate for CreateAchievementRequest {
    type Record = NewAchievement;

    fn validate(&self) -> Result<NewAchievement, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = validation::min_chars(&self.title, 1);
        if title.is_none() {
            errors.add("title", "Title is required.");
        }

        let description = validation::min_chars(&self.description, 1);
        if description.is_none() {
            errors.add("description", "Description is required.");
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok();
        if date.is_none() {
            errors.add("date", "Date must be in YYYY-MM-DD format.");
        }

        match (title, description, date) {
            (Some(title), Some(description), Some(date)) => Ok(NewAchievement {
                title,
                description,
                date,
                image_url: validation::optional_text(self.image_url.as_deref()),
            }),
            _ => Err(errors),
        }
    }
}
