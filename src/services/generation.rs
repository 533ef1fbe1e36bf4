use thiserror::Error;

use crate::completion::{CompletionClient, CompletionError, GroqClient};
use crate::models::{Quiz, QuizRequest};

use super::{
    prompt::build_prompt,
    validation::{parse_quiz, QuizError},
};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("invalid quiz response: {0}")]
    Invalid(#[from] QuizError),
}

impl GenerationError {
    /// Message shown on the generation form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Completion(CompletionError::Timeout) => {
                "The quiz generator took too long to respond. Please try again."
            }
            Self::Completion(_) => "Failed to generate quiz. Please try again.",
            Self::Invalid(QuizError::EmptyResult) => {
                "The generated quiz had no questions. Please try again."
            }
            Self::Invalid(_) => {
                "The quiz generator returned an invalid response. Please try again."
            }
        }
    }
}

// ---------------------------------------------------------------------------
// QuizGenerator
// ---------------------------------------------------------------------------

pub struct QuizGenerator<C: CompletionClient = GroqClient> {
    client: C,
}

impl<C: CompletionClient + Clone> Clone for QuizGenerator<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<C: CompletionClient> QuizGenerator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Makes a single completion call and validates the result.
    ///
    /// A quiz whose length differs from the requested count is accepted.
    pub async fn generate(&self, request: &QuizRequest) -> Result<Quiz, GenerationError> {
        let prompt = build_prompt(&request.topic, request.num_questions);
        let raw = self.client.complete(&prompt).await?;
        let quiz = parse_quiz(&raw)?;

        if quiz.len() != request.num_questions as usize {
            tracing::warn!(
                "asked for {} questions about {:?}, got {}",
                request.num_questions,
                request.topic,
                quiz.len()
            );
        }

        tracing::info!("generated {} questions about {:?}", quiz.len(), request.topic);
        Ok(quiz)
    }
}
