pub mod feedback;
pub mod generation;
pub mod prompt;
pub mod validation;

pub use feedback::FeedbackReport;
pub use generation::{GenerationError, QuizGenerator};
pub use validation::{parse_quiz, QuizError};
