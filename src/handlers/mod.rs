pub mod achievements;
pub mod donations;
pub mod pages;
pub mod volunteers;

use crate::{
    services::submission::{Notice, SubmissionError, SubmitOutcome},
    utils::helpers::ApiResponse,
};
use actix_web::{HttpResponse, error::InternalError, web};
use serde::Serialize;
use tracing::debug;

const JSON_LIMIT: usize = 64 * 1024;

/// Body limit plus an error handler so malformed payloads get the same
/// `ApiResponse` envelope as every other rejection.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            debug!("Rejected request body: {}", err);
            let response = HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error(format!("Invalid request body: {}", err)));
            InternalError::from_response(err, response).into()
        })
}

#[derive(Debug, Serialize)]
pub struct Submitted<T> {
    pub record: T,
    pub confirmation: Notice,
}

/// Maps a submission outcome onto the HTTP response the site expects.
pub(crate) fn outcome_response<T: Serialize>(outcome: SubmitOutcome<T>) -> HttpResponse {
    match outcome {
        SubmitOutcome::Submitted {
            record,
            confirmation,
        } => HttpResponse::Created().json(ApiResponse::success_with_message(
            Submitted {
                record,
                confirmation,
            },
            confirmation.title.to_string(),
        )),
        SubmitOutcome::Invalid(errors) => {
            HttpResponse::UnprocessableEntity().json(ApiResponse::<()>::invalid(errors))
        }
        SubmitOutcome::Rejected { state } => HttpResponse::Conflict().json(
            ApiResponse::<()>::error(format!("Form is not accepting submissions ({:?})", state)),
        ),
        SubmitOutcome::Failed { error, notice } => {
            let mut response = match error {
                SubmissionError::TimedOut(_) => HttpResponse::GatewayTimeout(),
                SubmissionError::Store(_) => HttpResponse::ServiceUnavailable(),
            };
            response.json(ApiResponse::<()>::failure(notice.title, notice.description))
        }
    }
}
