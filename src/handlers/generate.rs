use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

use crate::{
    models::QuizRequest,
    names,
    rejections::{AppError, ResultExt},
    session::{SessionState, SessionStore},
    utils, views, AppState,
};

use crate::views::generate as generate_views;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        names::GENERATE_URL,
        get(generate_page).post(generate_post),
    )
}

async fn generate_page() -> maud::Markup {
    views::page(
        "Generate a Quiz",
        generate_views::generate_form(&generate_views::FormState::default()),
    )
}

#[derive(Deserialize)]
struct GeneratePost {
    #[serde(default)]
    topic: String,
    #[serde(default)]
    num_questions: Option<String>,
}

async fn generate_post(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(body): Form<GeneratePost>,
) -> Result<Response, AppError> {
    let form_with_error = |error: &str| {
        views::page(
            "Generate a Quiz",
            generate_views::generate_form(&generate_views::FormState {
                topic: &body.topic,
                num_questions: body.num_questions.as_deref(),
                error: Some(error),
            }),
        )
        .into_response()
    };

    let request = match QuizRequest::from_form(&body.topic, body.num_questions.as_deref()) {
        Ok(request) => request,
        Err(message) => return Ok(form_with_error(message)),
    };

    let quiz = match state.generator.generate(&request).await {
        Ok(quiz) => quiz,
        Err(e) => {
            tracing::error!("could not generate quiz about {:?}: {e}", request.topic);
            return Ok(form_with_error(e.user_message()));
        }
    };

    let session_id = jar
        .get(names::QUIZ_SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
        .unwrap_or_else(utils::new_session_id);

    state
        .sessions
        .set(&session_id, SessionState::new(quiz))
        .await
        .reject("could not store quiz session")?;

    tracing::info!("started quiz session {session_id} on {:?}", request.topic);

    let jar = jar.add(utils::session_cookie(session_id, state.secure_cookies));
    Ok((jar, Redirect::to(names::QUIZ_URL)).into_response())
}
