use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Score, Student},
        dto::{
            request::{RecordScoreRequest, RegisterStudentRequest},
            response::SeedSummaryDto,
        },
    },
    repositories::{ScoreRepository, StudentRepository},
};

const DEMO_STUDENTS: &[(&str, &str)] = &[
    ("Alice", "Johnson"),
    ("Bob", "Smith"),
    ("Charlie", "Brown"),
    ("David", "Miller"),
    ("Emma", "Davis"),
    ("Frank", "Wilson"),
    ("Grace", "Taylor"),
    ("Henry", "Moore"),
    ("Isabella", "Anderson"),
    ("Jack", "Thomas"),
    ("Katelyn", "Martin"),
    ("Liam", "White"),
    ("Mia", "Harris"),
    ("Noah", "Clark"),
    ("Olivia", "Lewis"),
    ("Parker", "Young"),
    ("Quinn", "Hall"),
    ("Ryan", "King"),
    ("Sophia", "Wright"),
    ("Tyler", "Scott"),
];

const COURSE_MODULES: &[&str] = &[
    "Intro to Assembly",
    "Branch Instructions",
    "Data Transfer",
    "Stack & Memory",
    "Arithmetic & Logic",
    "Loops & Conditions",
];

pub struct RosterService {
    students: Arc<dyn StudentRepository>,
    scores: Arc<dyn ScoreRepository>,
}

impl RosterService {
    pub fn new(students: Arc<dyn StudentRepository>, scores: Arc<dyn ScoreRepository>) -> Self {
        Self { students, scores }
    }

    pub async fn register_student(&self, request: RegisterStudentRequest) -> AppResult<Student> {
        if self
            .students
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "Student with email '{}' already exists",
                request.email
            )));
        }

        let student = Student::new(&request.first_name, &request.last_name, &request.email);
        let created = self.students.create(student).await?;

        log::info!("Registered student {}", created.id);
        Ok(created)
    }

    pub async fn record_score(&self, request: RecordScoreRequest) -> AppResult<Score> {
        self.students
            .find_by_id(&request.student_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Student with id '{}' not found",
                    request.student_id
                ))
            })?;

        let score = Score::new(
            &request.student_id,
            &request.module,
            request.score,
            request.completed,
        );
        let created = self.scores.create(score).await?;
        Ok(created)
    }

    /// Seeds the demo roster: 20 students with a score in each of the 6
    /// course modules. Scores follow a deterministic spread over 60..=100 in
    /// place of the random values a demo would otherwise use, with a module
    /// counted as completed at 70 or above.
    pub async fn seed_demo_data(&self) -> AppResult<SeedSummaryDto> {
        let mut students = Vec::with_capacity(DEMO_STUDENTS.len());
        for (first_name, last_name) in DEMO_STUDENTS {
            let email = format!("{}@example.com", first_name.to_lowercase());
            let student = Student::new(first_name, last_name, &email);
            students.push(self.students.create(student).await?);
        }

        let mut scores = Vec::with_capacity(students.len() * COURSE_MODULES.len());
        for (i, student) in students.iter().enumerate() {
            for (j, module) in COURSE_MODULES.iter().enumerate() {
                let value = demo_score(i, j);
                scores.push(Score::new(&student.id, module, value, value >= 70.0));
            }
        }
        let inserted = self.scores.create_many(scores).await?;

        log::info!(
            "Seeded {} students and {} scores",
            students.len(),
            inserted
        );

        Ok(SeedSummaryDto {
            students: students.len(),
            scores: inserted,
            message: format!(
                "{} students and full module scores added successfully!",
                students.len()
            ),
        })
    }
}

fn demo_score(student_index: usize, module_index: usize) -> f64 {
    (60 + (student_index * 7 + module_index * 13) % 41) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::score_repository::MockScoreRepository;
    use crate::repositories::student_repository::MockStudentRepository;

    fn register_request() -> RegisterStudentRequest {
        RegisterStudentRequest {
            first_name: "Alice".to_string(),
            last_name: "Johnson".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn register_student_rejects_duplicate_email() {
        let mut students = MockStudentRepository::new();
        students
            .expect_find_by_email()
            .returning(|_| Ok(Some(Student::new("Alice", "Johnson", "alice@example.com"))));
        let scores = MockScoreRepository::new();

        let service = RosterService::new(Arc::new(students), Arc::new(scores));
        let err = service.register_student(register_request()).await.unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn register_student_creates_when_email_is_free() {
        let mut students = MockStudentRepository::new();
        students.expect_find_by_email().returning(|_| Ok(None));
        students.expect_create().returning(Ok);
        let scores = MockScoreRepository::new();

        let service = RosterService::new(Arc::new(students), Arc::new(scores));
        let student = service.register_student(register_request()).await.unwrap();
        assert_eq!(student.email, "alice@example.com");
        assert!(!student.id.is_empty());
    }

    #[tokio::test]
    async fn record_score_requires_existing_student() {
        let mut students = MockStudentRepository::new();
        students.expect_find_by_id().returning(|_| Ok(None));
        let scores = MockScoreRepository::new();

        let service = RosterService::new(Arc::new(students), Arc::new(scores));
        let err = service
            .record_score(RecordScoreRequest {
                student_id: "missing".to_string(),
                module: "Intro to Assembly".to_string(),
                score: 80.0,
                completed: true,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn seed_creates_a_score_per_student_per_module() {
        let mut students = MockStudentRepository::new();
        students.expect_create().returning(Ok);
        let mut scores = MockScoreRepository::new();
        scores
            .expect_create_many()
            .returning(|batch| Ok(batch.len()));

        let service = RosterService::new(Arc::new(students), Arc::new(scores));
        let summary = service.seed_demo_data().await.unwrap();
        assert_eq!(summary.students, 20);
        assert_eq!(summary.scores, 120);
    }

    #[test]
    fn demo_scores_stay_in_range_and_vary() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..20 {
            for j in 0..6 {
                let score = demo_score(i, j);
                assert!((60.0..=100.0).contains(&score));
                seen.insert(score as i64);
            }
        }
        assert!(seen.len() > 10);
    }
}
