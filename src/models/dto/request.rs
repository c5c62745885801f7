use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 100))]
    pub module_id: String,

    #[validate(range(min = 1, max = 50))]
    pub num_questions: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterStudentRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordScoreRequest {
    #[validate(length(min = 1))]
    pub student_id: String,

    #[validate(length(min = 1, max = 200))]
    pub module: String,

    #[validate(range(min = 0.0, max = 100.0))]
    pub score: f64,

    pub completed: bool,
}
