use serde::Serialize;

use crate::models::domain::QuizQuestion;

/// Payload returned by the quiz generation endpoint, shaped for the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleQuiz {
    #[serde(rename = "moduleId")]
    pub module_id: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleAverageDto {
    pub module: String,
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleCompletionDto {
    pub module: String,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAverageDto {
    pub student: String,
    pub average_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardDto {
    pub top_students: Vec<StudentAverageDto>,
    pub bottom_students: Vec<StudentAverageDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummaryDto {
    pub averages: Vec<ModuleAverageDto>,
    pub completion_rates: Vec<ModuleCompletionDto>,
    pub top_students: Vec<StudentAverageDto>,
    pub bottom_students: Vec<StudentAverageDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedSummaryDto {
    pub students: usize,
    pub scores: usize,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{QuizChoice, QuizQuestion};

    #[test]
    fn module_quiz_serializes_module_id_in_camel_case() {
        let quiz = ModuleQuiz {
            module_id: "3".to_string(),
            questions: vec![QuizQuestion {
                id: "1".to_string(),
                prompt: "Q?".to_string(),
                choices: vec![
                    QuizChoice {
                        id: "A".to_string(),
                        text: "x".to_string(),
                        is_correct: true,
                    },
                    QuizChoice {
                        id: "B".to_string(),
                        text: "y".to_string(),
                        is_correct: false,
                    },
                    QuizChoice {
                        id: "C".to_string(),
                        text: "z".to_string(),
                        is_correct: false,
                    },
                    QuizChoice {
                        id: "D".to_string(),
                        text: "w".to_string(),
                        is_correct: false,
                    },
                ],
                hint: None,
            }],
        };

        let json = serde_json::to_string(&quiz).expect("quiz should serialize");
        assert!(json.contains("\"moduleId\":\"3\""));
        assert!(json.contains("\"questions\""));
    }
}
