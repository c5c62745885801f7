/// Builds the instruction sent to CreateAI when generating a mastery quiz.
///
/// The shape requested here is the contract the recovery pipeline repairs
/// toward: a literal JSON array of questions, four choices each, exactly one
/// marked correct.
pub fn quiz_generation_prompt(module_id: &str, num_questions: u32) -> String {
    format!(
        "Generate exactly {num_questions} multiple-choice quiz questions for CSE 230 \
(Computer Organization and Assembly Language) module {module_id}. \
Respond with a literal JSON array and nothing else: no commentary, no markdown \
code fences, no text before or after the array. \
Each element must have this exact shape: \
{{\"id\": \"1\", \"prompt\": \"question text\", \"choices\": [{{\"id\": \"A\", \
\"text\": \"choice text\", \"isCorrect\": true}}], \"hint\": \"optional hint text\"}}. \
Every question must have exactly 4 choices, and exactly one choice per question \
may have \"isCorrect\": true."
    )
}
