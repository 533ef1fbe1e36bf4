use crate::{models::Question, session::SessionState};

pub struct ReviewItem<'a> {
    pub question: &'a Question,
    /// `None` when the quiz was left before reaching this question.
    pub answer: Option<&'a str>,
    pub is_correct: bool,
}

pub struct FeedbackReport<'a> {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub is_complete: bool,
    pub items: Vec<ReviewItem<'a>>,
}

impl<'a> FeedbackReport<'a> {
    /// Returns `None` for a quiz without questions, which has no meaningful
    /// percentage.
    pub fn from_state(state: &'a SessionState) -> Option<Self> {
        let total = state.total_questions();
        let percentage = percentage(state.score, total)?;

        let items = state
            .quiz
            .questions
            .iter()
            .enumerate()
            .map(|(idx, question)| {
                let answer = state.answers.get(idx).map(String::as_str);
                ReviewItem {
                    question,
                    answer,
                    is_correct: answer.is_some_and(|a| question.is_correct(a)),
                }
            })
            .collect();

        Some(Self {
            score: state.score,
            total,
            percentage,
            is_complete: state.is_complete(),
            items,
        })
    }
}

pub fn percentage(score: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(score as f64 / total as f64 * 100.0)
}
