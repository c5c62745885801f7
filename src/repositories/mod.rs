pub mod score_repository;
pub mod student_repository;

pub use score_repository::{MongoScoreRepository, ScoreRepository};
pub use student_repository::{MongoStudentRepository, StudentRepository};
