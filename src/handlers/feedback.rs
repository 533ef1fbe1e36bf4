use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};

use crate::{
    extractors::ActiveQuiz,
    names,
    rejections::{AppError, ResultExt},
    services::FeedbackReport,
    session::SessionStore,
    views, AppState,
};

use crate::views::feedback as feedback_views;

pub fn routes() -> Router<AppState> {
    Router::new().route(names::FEEDBACK_URL, get(feedback_page))
}

async fn feedback_page(
    State(state): State<AppState>,
    ActiveQuiz {
        session_id,
        state: quiz,
    }: ActiveQuiz,
) -> Result<Response, AppError> {
    if let Some(report) = FeedbackReport::from_state(&quiz) {
        return Ok(views::page("Results", feedback_views::feedback(&report)).into_response());
    }

    tracing::warn!("session {session_id} holds a quiz without questions, clearing it");
    state
        .sessions
        .clear(&session_id)
        .await
        .reject("could not clear quiz session")?;

    Ok(Redirect::to(names::GENERATE_URL).into_response())
}
