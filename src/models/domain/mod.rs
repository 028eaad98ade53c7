pub mod difficulty;
pub mod question;
pub mod quiz_attempt;
pub mod quiz_record;
pub use difficulty::Difficulty;
pub use question::Question;
pub use quiz_attempt::{QuizAttempt, QuizAttemptQuestion};
pub use quiz_record::QuizRecord;
