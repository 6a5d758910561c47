use crate::validation::FieldErrors;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
            errors: None,
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
            error: None,
            errors: None,
        }
    }

    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message: None,
            data: None,
            error: Some(message),
            errors: None,
        }
    }

    /// A failure with a short title and a longer, user-facing description.
    pub fn failure(title: &str, description: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message: Some(title.to_string()),
            data: None,
            error: Some(description.to_string()),
            errors: None,
        }
    }

    /// Field-level validation failure; `message` summarises, `errors` maps
    /// each offending field to its message.
    pub fn invalid(errors: FieldErrors) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message: None,
            data: None,
            error: Some("Please correct the highlighted fields.".to_string()),
            errors: Some(errors),
        }
    }
}
