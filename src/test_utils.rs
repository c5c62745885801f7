use crate::models::domain::{Score, Student};

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use serde_json::{json, Value};

    /// Creates a standard test student
    pub fn test_student() -> Student {
        Student::new("Test", "Student", "test@example.com")
    }

    /// Creates a test student with a custom email
    pub fn test_student_with_email(email: &str) -> Student {
        Student::new("Test", "Student", email)
    }

    /// Creates a handful of scores for one student across modules
    pub fn test_scores(student_id: &str) -> Vec<Score> {
        vec![
            Score::new(student_id, "Intro to Assembly", 90.0, true),
            Score::new(student_id, "Branch Instructions", 75.0, true),
            Score::new(student_id, "Data Transfer", 55.0, false),
        ]
    }

    /// A raw question object in the shape the upstream model is asked to
    /// produce, with four choices and exactly one marked correct.
    pub fn raw_question(id: &str, prompt: &str) -> Value {
        json!({
            "id": id,
            "prompt": prompt,
            "choices": [
                { "id": "A", "text": "First", "isCorrect": true },
                { "id": "B", "text": "Second", "isCorrect": false },
                { "id": "C", "text": "Third", "isCorrect": false },
                { "id": "D", "text": "Fourth", "isCorrect": false },
            ],
        })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_test_student() {
        let student = test_student();
        assert_eq!(student.email, "test@example.com");
        assert_eq!(student.full_name(), "Test Student");
    }

    #[test]
    fn test_fixtures_test_scores() {
        let scores = test_scores("abc");
        assert_eq!(scores.len(), 3);
        assert!(scores.iter().all(|s| s.student_id == "abc"));
    }

    #[test]
    fn test_fixtures_raw_question_shape() {
        let question = raw_question("1", "What does MOV do?");
        assert_eq!(question["choices"].as_array().map(Vec::len), Some(4));
    }
}
