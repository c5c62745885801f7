pub mod question;
pub mod score;
pub mod student;
pub use question::{QuizChoice, QuizQuestion};
pub use score::{ModuleScoreAggregate, Score, StudentScoreAverage};
pub use student::Student;
