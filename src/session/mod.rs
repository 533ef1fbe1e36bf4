//! Per-user quiz progress and the transitions the quiz runner applies to it.

mod store;

pub use store::{MemorySessionStore, SessionStore};

use crate::models::{Question, Quiz};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub quiz: Quiz,
    pub current_question_index: usize,
    pub score: usize,
    pub answers: Vec<String>,
}

/// Where a quiz attempt stands. The "no quiz yet" state is the absence of a
/// [`SessionState`] altogether.
#[derive(Debug, PartialEq)]
pub enum Phase<'a> {
    InProgress {
        question: &'a Question,
        /// 1-based position of `question`.
        number: usize,
        total: usize,
    },
    Complete,
}

impl SessionState {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            current_question_index: 0,
            score: 0,
            answers: Vec::new(),
        }
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.len()
    }

    /// An index at or past the end of the quiz counts as complete, even if it
    /// got there out of band.
    pub fn phase(&self) -> Phase<'_> {
        match self.quiz.questions.get(self.current_question_index) {
            Some(question) => Phase::InProgress {
                question,
                number: self.current_question_index + 1,
                total: self.total_questions(),
            },
            None => Phase::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase(), Phase::Complete)
    }

    /// Records `answer` for the current question and moves on.
    ///
    /// Returns whether the answer was correct, or `None` without touching the
    /// state when the quiz is already complete.
    pub fn submit_answer(&mut self, answer: String) -> Option<bool> {
        let is_correct = match self.phase() {
            Phase::InProgress { question, .. } => question.is_correct(&answer),
            Phase::Complete => return None,
        };

        self.answers.push(answer);
        if is_correct {
            self.score += 1;
        }
        self.current_question_index += 1;

        Some(is_correct)
    }
}
