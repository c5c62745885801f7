use std::sync::Arc;

use crate::{
    constants::prompts::quiz_generation_prompt,
    errors::{AppError, AppResult},
    models::dto::response::ModuleQuiz,
    services::ai_client::{resolve_response_text, AiQueryClient},
    services::quiz_generation,
};

pub struct QuizService {
    ai_client: Arc<dyn AiQueryClient>,
}

impl QuizService {
    pub fn new(ai_client: Arc<dyn AiQueryClient>) -> Self {
        Self { ai_client }
    }

    /// Generates a mastery quiz for a course module by querying CreateAI and
    /// running the response through the recovery pipeline. The upstream call
    /// is made once; a response that cannot be salvaged surfaces as an
    /// upstream error rather than triggering a retry here.
    pub async fn generate_module_quiz(
        &self,
        module_id: &str,
        num_questions: u32,
    ) -> AppResult<ModuleQuiz> {
        let prompt = quiz_generation_prompt(module_id, num_questions);
        let envelope = self.ai_client.query(&prompt).await?;

        let raw = resolve_response_text(&envelope).ok_or_else(|| {
            AppError::UpstreamError(
                "CreateAI response did not contain any response text".to_string(),
            )
        })?;

        let candidate = quiz_generation::extract(&raw)?;
        let questions = quiz_generation::normalize(candidate, num_questions as usize)?;

        log::info!(
            "Generated {} quiz questions for module {}",
            questions.len(),
            module_id
        );

        Ok(ModuleQuiz {
            module_id: module_id.to_string(),
            questions,
        })
    }
}
