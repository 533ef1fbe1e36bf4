pub mod completion;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;
pub mod session;
pub mod statics;
pub mod utils;
pub mod views;

use std::time::Instant;

use axum::{extract::FromRef, middleware, Router};
use axum_extra::extract::cookie::Key;

use crate::{services::QuizGenerator, session::MemorySessionStore};

#[derive(Clone)]
pub struct AppState {
    pub generator: QuizGenerator,
    pub sessions: MemorySessionStore,
    pub cookie_key: Key,
    pub secure_cookies: bool,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::generate::routes())
        .merge(handlers::quiz::routes())
        .merge(handlers::feedback::routes())
        .nest("/static", statics::routes())
        .fallback(rejections::not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        "{method} {path} -> {} in {:?}",
        response.status().as_u16(),
        started.elapsed()
    );
    response
}
