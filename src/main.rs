use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use coursetutor_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to initialize app state: {}", e)))?;

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::fetch_quiz)
            .service(handlers::register_student)
            .service(handlers::record_score)
            .service(handlers::seed_demo_data)
            .service(handlers::get_average_scores)
            .service(handlers::get_completion_rates)
            .service(handlers::get_leaderboard)
            .service(handlers::get_analytics_summary)
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
    })
    .bind((host, port))?
    .run()
    .await
}
