use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

#[get("/analytics/averages")]
async fn get_average_scores(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let averages = state.analytics_service.average_scores().await?;
    Ok(HttpResponse::Ok().json(averages))
}

#[get("/analytics/completion")]
async fn get_completion_rates(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rates = state.analytics_service.completion_rates().await?;
    Ok(HttpResponse::Ok().json(rates))
}

#[get("/analytics/leaders")]
async fn get_leaderboard(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let leaders = state.analytics_service.top_and_bottom_students().await?;
    Ok(HttpResponse::Ok().json(leaders))
}

#[get("/analytics/summary")]
async fn get_analytics_summary(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let summary = state.analytics_service.combined_analytics().await?;
    Ok(HttpResponse::Ok().json(summary))
}
