use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::{
    extractors::ActiveQuiz,
    names,
    rejections::{AppError, ResultExt},
    session::{Phase, SessionStore},
    views, AppState,
};

use crate::views::quiz as quiz_views;

pub fn routes() -> Router<AppState> {
    Router::new().route(names::QUIZ_URL, get(quiz_page).post(submit_answer))
}

async fn quiz_page(ActiveQuiz { state: quiz, .. }: ActiveQuiz) -> Response {
    match quiz.phase() {
        Phase::InProgress {
            question,
            number,
            total,
        } => views::page("Quiz", quiz_views::question(question, number, total)).into_response(),
        Phase::Complete => Redirect::to(names::FEEDBACK_URL).into_response(),
    }
}

#[derive(Deserialize)]
struct SubmitAnswerBody {
    #[serde(default)]
    answer: String,
}

async fn submit_answer(
    State(state): State<AppState>,
    ActiveQuiz {
        session_id,
        state: mut quiz,
    }: ActiveQuiz,
    Form(body): Form<SubmitAnswerBody>,
) -> Result<Response, AppError> {
    let Some(is_correct) = quiz.submit_answer(body.answer) else {
        tracing::debug!("answer submitted to finished quiz {session_id}");
        return Ok(Redirect::to(names::FEEDBACK_URL).into_response());
    };

    tracing::debug!(
        "session {session_id}: question {} answered, correct={is_correct}, score={}",
        quiz.current_question_index,
        quiz.score
    );

    let page = match quiz.phase() {
        Phase::InProgress {
            question,
            number,
            total,
        } => Some(views::page("Quiz", quiz_views::question(question, number, total))),
        Phase::Complete => None,
    };

    state
        .sessions
        .set(&session_id, quiz)
        .await
        .reject("could not save quiz progress")?;

    Ok(match page {
        Some(page) => page.into_response(),
        None => Redirect::to(names::FEEDBACK_URL).into_response(),
    })
}
