use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::SignedCookieJar;

use crate::{
    names,
    rejections::ResultExt,
    session::{SessionState, SessionStore},
    AppState,
};

/// The caller's quiz session, loaded from the store via the signed session
/// cookie.
///
/// Requests without a valid cookie or without a stored quiz are redirected to
/// the generation form.
pub struct ActiveQuiz {
    pub session_id: String,
    pub state: SessionState,
}

impl FromRequestParts<AppState> for ActiveQuiz {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_headers(&parts.headers, state.cookie_key.clone());

        if let Some(session_id) = jar
            .get(names::QUIZ_SESSION_COOKIE_NAME)
            .map(|c| c.value().to_string())
        {
            let stored = state
                .sessions
                .get(&session_id)
                .await
                .reject("could not load quiz session")
                .map_err(IntoResponse::into_response)?;

            if let Some(quiz_state) = stored {
                return Ok(ActiveQuiz {
                    session_id,
                    state: quiz_state,
                });
            }
        }

        tracing::debug!("no active quiz for {}, redirecting", parts.uri.path());
        Err(Redirect::to(names::GENERATE_URL).into_response())
    }
}
