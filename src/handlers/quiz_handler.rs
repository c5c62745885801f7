use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::GenerateQuizRequest,
};

#[post("/fetch/quiz")]
async fn fetch_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let quiz = state
        .quiz_service
        .generate_module_quiz(&request.module_id, request.num_questions)
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}
