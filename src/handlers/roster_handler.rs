use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{RecordScoreRequest, RegisterStudentRequest},
};

#[post("/students")]
async fn register_student(
    state: web::Data<AppState>,
    request: web::Json<RegisterStudentRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let student = state.roster_service.register_student(request).await?;
    Ok(HttpResponse::Created().json(student))
}

#[post("/scores")]
async fn record_score(
    state: web::Data<AppState>,
    request: web::Json<RecordScoreRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let score = state.roster_service.record_score(request).await?;
    Ok(HttpResponse::Created().json(score))
}

#[post("/seed-data")]
async fn seed_demo_data(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let summary = state.roster_service.seed_demo_data().await?;
    Ok(HttpResponse::Created().json(summary))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let db_health = state.db.health_check().await;

    let status = if db_health.is_ok() {
        "ready"
    } else {
        "not_ready"
    };

    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health.is_ok() { "ok" } else { "error" }
        }
    });

    if db_health.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
