use crate::{
    requests::achievement::CreateAchievementRequest,
    services::achievements::AchievementTimeline,
    state::AppState,
    utils::helpers::ApiResponse,
    validation::Validate,
};
use actix_web::{HttpResponse, Result, web};
use tracing::{error, info};

pub async fn timeline(state: web::Data<AppState>) -> Result<HttpResponse> {
    info!("Getting achievements timeline");

    let timeline = AchievementTimeline::load(state.store.as_ref(), state.submission_timeout).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(timeline)))
}

pub async fn create(
    state: web::Data<AppState>,
    request: web::Json<CreateAchievementRequest>,
) -> Result<HttpResponse> {
    let achievement = match request.validate() {
        Ok(achievement) => achievement,
        Err(errors) => {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::<()>::invalid(errors)));
        }
    };

    info!("Creating achievement: {}", achievement.title);

    match state.store.insert_achievement(achievement).await {
        Ok(achievement) => {
            info!("Successfully created achievement with ID: {}", achievement.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(achievement)))
        }
        Err(e) => {
            error!("Error creating achievement: {}", e);
            Ok(
                HttpResponse::ServiceUnavailable().json(ApiResponse::<()>::error(
                    "Failed to create achievement".to_string(),
                )),
            )
        }
    }
}
