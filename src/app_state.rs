use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoScoreRepository, MongoStudentRepository},
    services::{AnalyticsService, CreateAiClient, QuizService, RosterService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub roster_service: Arc<RosterService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let config = Arc::new(config);
        let db = Database::connect(&config).await?;

        let student_repository = Arc::new(MongoStudentRepository::new(&db));
        student_repository.ensure_indexes().await?;
        let score_repository = Arc::new(MongoScoreRepository::new(&db));

        let ai_client = Arc::new(CreateAiClient::new(config.clone())?);
        let quiz_service = Arc::new(QuizService::new(ai_client));
        let analytics_service = Arc::new(AnalyticsService::new(score_repository.clone()));
        let roster_service = Arc::new(RosterService::new(student_repository, score_repository));

        Ok(Self {
            quiz_service,
            analytics_service,
            roster_service,
            db,
            config,
        })
    }
}
