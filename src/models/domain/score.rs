use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Score {
    pub id: String,
    pub student_id: String,
    pub module: String,
    pub score: f64,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Score {
    pub fn new(student_id: &str, module: &str, score: f64, completed: bool) -> Self {
        Score {
            id: Uuid::new_v4().to_string(),
            student_id: student_id.to_string(),
            module: module.to_string(),
            score,
            completed,
            created_at: Some(Utc::now()),
        }
    }
}

/// Per-module aggregation row produced by the score repository.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ModuleScoreAggregate {
    pub module: String,
    pub average_score: f64,
    pub total: i64,
    pub completed: i64,
}

/// Per-student average row produced by the score repository, joined with the
/// student's full name.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StudentScoreAverage {
    pub student: String,
    pub average_score: f64,
}
