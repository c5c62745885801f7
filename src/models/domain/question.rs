use serde::{Deserialize, Serialize};

/// Canonical quiz question handed back to the frontend. Instances are only
/// ever built by the normalization pass, which guarantees the invariants:
/// a non-empty id and prompt, exactly four choices, exactly one correct.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<QuizChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizChoice {
    pub id: String,
    pub text: String,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
}

impl QuizQuestion {
    pub fn correct_choice(&self) -> Option<&QuizChoice> {
        self.choices.iter().find(|choice| choice.is_correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> QuizQuestion {
        QuizQuestion {
            id: "1".to_string(),
            prompt: "Which register holds the stack pointer?".to_string(),
            choices: vec![
                QuizChoice {
                    id: "A".to_string(),
                    text: "rsp".to_string(),
                    is_correct: true,
                },
                QuizChoice {
                    id: "B".to_string(),
                    text: "rbp".to_string(),
                    is_correct: false,
                },
                QuizChoice {
                    id: "C".to_string(),
                    text: "rax".to_string(),
                    is_correct: false,
                },
                QuizChoice {
                    id: "D".to_string(),
                    text: "rip".to_string(),
                    is_correct: false,
                },
            ],
            hint: Some("Think push/pop.".to_string()),
        }
    }

    #[test]
    fn quiz_choice_serializes_is_correct_in_camel_case() {
        let choice = QuizChoice {
            id: "A".to_string(),
            text: "rsp".to_string(),
            is_correct: true,
        };

        let json = serde_json::to_string(&choice).expect("choice should serialize");
        assert!(json.contains("\"isCorrect\":true"));
        assert!(!json.contains("is_correct"));
    }

    #[test]
    fn quiz_question_omits_absent_hint() {
        let mut question = sample_question();
        question.hint = None;

        let json = serde_json::to_string(&question).expect("question should serialize");
        assert!(!json.contains("hint"));
    }

    #[test]
    fn quiz_question_round_trip_serialization() {
        let question = sample_question();

        let json = serde_json::to_string(&question).expect("question should serialize");
        let parsed: QuizQuestion =
            serde_json::from_str(&json).expect("question should deserialize");
        assert_eq!(question, parsed);
    }

    #[test]
    fn correct_choice_returns_the_marked_choice() {
        let question = sample_question();
        assert_eq!(question.correct_choice().map(|c| c.id.as_str()), Some("A"));
    }
}
