pub mod analytics_handler;
pub mod quiz_handler;
pub mod roster_handler;

pub use analytics_handler::{
    get_analytics_summary, get_average_scores, get_completion_rates, get_leaderboard,
};
pub use quiz_handler::fetch_quiz;
pub use roster_handler::{
    health_check, health_check_ready, record_score, register_student, seed_demo_data,
};
