use crate::{
    handlers::outcome_response,
    requests::donation::DonationRequest,
    services::{
        email,
        forms::DonationForm,
        submission::{SubmissionHandler, SubmitOutcome},
    },
    state::AppState,
};
use actix_web::{HttpResponse, Result, web};
use tracing::{error, info};

pub async fn create(
    state: web::Data<AppState>,
    request: web::Json<DonationRequest>,
) -> Result<HttpResponse> {
    info!("Received donation form submission");

    let form: SubmissionHandler<DonationForm> =
        SubmissionHandler::new(state.store.clone(), state.submission_timeout);
    let outcome = form.submit_input(request.into_inner()).await;

    if let (SubmitOutcome::Submitted { record, .. }, Some(mailer)) = (&outcome, &state.mailer) {
        info!("Donation {} recorded, sending acknowledgement", record.id);
        match mailer.templates().donation_thanks(record) {
            Ok(template) => email::send_in_background(
                mailer.clone(),
                record.email.clone(),
                record.name.clone(),
                template,
            ),
            Err(e) => error!("Failed to render donation acknowledgement: {}", e),
        }
    }

    Ok(outcome_response(outcome))
}
