use std::num::IntErrorKind;

use serde::Deserialize;

use crate::names;

/// A single multiple-choice question as produced by the completion API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    /// Text of the correct option.
    pub correct: String,
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct == answer
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// What the user asked for on the generation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub topic: String,
    pub num_questions: u32,
}

impl QuizRequest {
    /// Builds a request from raw form values.
    ///
    /// The topic is trimmed and must not be blank. A missing or blank count
    /// falls back to the default; anything else must be a number and is
    /// clamped to the supported range.
    pub fn from_form(topic: &str, num_questions: Option<&str>) -> Result<Self, &'static str> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err("Please enter a topic.");
        }

        let num_questions = match num_questions.map(str::trim) {
            None | Some("") => names::DEFAULT_QUESTION_COUNT,
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) => n.clamp(
                    names::MIN_QUESTION_COUNT as i64,
                    names::MAX_QUESTION_COUNT as i64,
                ) as u32,
                Err(e) => match e.kind() {
                    IntErrorKind::PosOverflow => names::MAX_QUESTION_COUNT,
                    IntErrorKind::NegOverflow => names::MIN_QUESTION_COUNT,
                    _ => return Err("The number of questions must be a whole number."),
                },
            },
        };

        Ok(Self {
            topic: topic.to_string(),
            num_questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_count_uses_default() {
        let request = QuizRequest::from_form("Photosynthesis", None).unwrap();
        assert_eq!(request.num_questions, names::DEFAULT_QUESTION_COUNT);

        let request = QuizRequest::from_form("Photosynthesis", Some("  ")).unwrap();
        assert_eq!(request.num_questions, names::DEFAULT_QUESTION_COUNT);
    }

    #[test]
    fn count_is_clamped() {
        let request = QuizRequest::from_form("Rust", Some("0")).unwrap();
        assert_eq!(request.num_questions, names::MIN_QUESTION_COUNT);

        let request = QuizRequest::from_form("Rust", Some("500")).unwrap();
        assert_eq!(request.num_questions, names::MAX_QUESTION_COUNT);

        let request = QuizRequest::from_form("Rust", Some("-3")).unwrap();
        assert_eq!(request.num_questions, names::MIN_QUESTION_COUNT);
    }

    #[test]
    fn huge_count_is_clamped_too() {
        let request = QuizRequest::from_form("Rust", Some("99999999999999999999")).unwrap();
        assert_eq!(request.num_questions, names::MAX_QUESTION_COUNT);

        let request = QuizRequest::from_form("Rust", Some("-99999999999999999999")).unwrap();
        assert_eq!(request.num_questions, names::MIN_QUESTION_COUNT);
    }

    #[test]
    fn topic_is_trimmed_and_required() {
        let request = QuizRequest::from_form("  Volcanoes ", Some("3")).unwrap();
        assert_eq!(request.topic, "Volcanoes");
        assert_eq!(request.num_questions, 3);

        assert!(QuizRequest::from_form("   ", Some("3")).is_err());
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        assert!(QuizRequest::from_form("Rust", Some("five")).is_err());
    }

    #[test]
    fn answers_are_compared_exactly() {
        let question = Question {
            question: "Q".to_string(),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct: "A".to_string(),
            explanation: String::new(),
        };
        assert!(question.is_correct("A"));
        assert!(!question.is_correct("a"));
        assert!(!question.is_correct("A "));
        assert!(!question.is_correct(""));
    }
}
