pub mod ai_client;
pub mod analytics_service;
pub mod quiz_generation;
pub mod quiz_service;
pub mod roster_service;

pub use ai_client::{AiQueryClient, CreateAiClient};
pub use analytics_service::AnalyticsService;
pub use quiz_service::QuizService;
pub use roster_service::RosterService;
