//! Converts extracted candidate elements into canonical [`QuizQuestion`]s.
//!
//! Individual malformed elements are repaired where an invariant allows it
//! and dropped where it does not; only a batch with zero survivors fails.

use serde_json::Value;

use super::GenerationError;
use crate::models::domain::{QuizChoice, QuizQuestion};

pub const CHOICES_PER_QUESTION: usize = 4;

/// Normalizes a candidate array into at most `limit` valid questions,
/// preserving the original relative order.
pub fn normalize(candidate: Vec<Value>, limit: usize) -> Result<Vec<QuizQuestion>, GenerationError> {
    let questions: Vec<QuizQuestion> = candidate
        .iter()
        .enumerate()
        .filter_map(|(index, element)| normalize_question(element, index))
        .take(limit)
        .collect();

    if questions.is_empty() {
        return Err(GenerationError::NoValidQuestions);
    }
    Ok(questions)
}

fn normalize_question(element: &Value, index: usize) -> Option<QuizQuestion> {
    let fields = element.as_object()?;

    let id = match fields.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        _ => (index + 1).to_string(),
    };
    let prompt = fields
        .get("prompt")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    // Hard structural gate: anything other than exactly four choices drops
    // the whole element, with no padding or truncation.
    let raw_choices = fields.get("choices").and_then(Value::as_array)?;
    if raw_choices.len() != CHOICES_PER_QUESTION {
        return None;
    }

    let mut choices: Vec<QuizChoice> =
        raw_choices.iter().filter_map(normalize_choice).collect();
    enforce_single_correct(&mut choices);

    if choices.len() != CHOICES_PER_QUESTION || prompt.is_empty() {
        return None;
    }

    let hint = fields.get("hint").and_then(Value::as_str).map(str::to_owned);

    Some(QuizQuestion {
        id,
        prompt,
        choices,
        hint,
    })
}

fn normalize_choice(entry: &Value) -> Option<QuizChoice> {
    let fields = entry.as_object()?;
    Some(QuizChoice {
        id: fields
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        text: fields
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        is_correct: fields
            .get("isCorrect")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

/// Repair rule: exactly one correct choice. Zero correct promotes the first
/// choice; several correct keeps only the first marked one (first-match-wins,
/// a deterministic tie-break rather than a content-aware pick).
fn enforce_single_correct(choices: &mut [QuizChoice]) {
    match choices.iter().position(|choice| choice.is_correct) {
        Some(winner) => {
            for (i, choice) in choices.iter_mut().enumerate() {
                choice.is_correct = i == winner;
            }
        }
        None => {
            if let Some(first) = choices.first_mut() {
                first.is_correct = true;
            }
        }
    }
}
