use crate::{
    handlers::outcome_response,
    requests::volunteer::VolunteerRequest,
    services::{
        email,
        forms::VolunteerForm,
        submission::{SubmissionHandler, SubmitOutcome},
    },
    state::AppState,
};
use actix_web::{HttpResponse, Result, web};
use tracing::{error, info};

pub async fn create(
    state: web::Data<AppState>,
    request: web::Json<VolunteerRequest>,
) -> Result<HttpResponse> {
    info!("Received volunteer application");

    let form: SubmissionHandler<VolunteerForm> =
        SubmissionHandler::new(state.store.clone(), state.submission_timeout);
    let outcome = form.submit_input(request.into_inner()).await;

    if let (SubmitOutcome::Submitted { record, .. }, Some(mailer)) = (&outcome, &state.mailer) {
        info!("Volunteer application {} recorded", record.id);
        match mailer.templates().volunteer_received(record) {
            Ok(template) => email::send_in_background(
                mailer.clone(),
                record.email.clone(),
                record.name.clone(),
                template,
            ),
            Err(e) => error!("Failed to render volunteer acknowledgement: {}", e),
        }
    }

    Ok(outcome_response(outcome))
}
