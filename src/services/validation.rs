use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::{
    models::{Question, Quiz},
    names,
};

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("response has no \"questions\" field")]
    MissingField,

    #[error("\"questions\" is not a list")]
    WrongType,

    #[error("\"questions\" is empty")]
    EmptyResult,

    #[error("question {index} is malformed: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

/// Parses the raw completion text into a [`Quiz`].
///
/// Nothing is trimmed or extracted from surrounding prose: the whole text must
/// be the JSON document.
pub fn parse_quiz(raw: &str) -> Result<Quiz, QuizError> {
    tracing::debug!(raw_response = %raw, "validating completion response");

    let value: Value = serde_json::from_str(raw).map_err(QuizError::InvalidJson)?;

    let questions = value.get("questions").ok_or(QuizError::MissingField)?;
    let questions = questions.as_array().ok_or(QuizError::WrongType)?;
    if questions.is_empty() {
        return Err(QuizError::EmptyResult);
    }

    let questions = questions
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_question(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Quiz { questions })
}

fn parse_question(index: usize, entry: &Value) -> Result<Question, QuizError> {
    let invalid = |reason: String| QuizError::InvalidQuestion { index, reason };

    let question = Question::deserialize(entry).map_err(|e| invalid(e.to_string()))?;

    if question.options.len() != names::OPTIONS_PER_QUESTION {
        return Err(invalid(format!(
            "expected {} options, got {}",
            names::OPTIONS_PER_QUESTION,
            question.options.len()
        )));
    }

    if !question.options.contains(&question.correct) {
        return Err(invalid(format!(
            "correct answer {:?} is not one of the options",
            question.correct
        )));
    }

    Ok(question)
}
