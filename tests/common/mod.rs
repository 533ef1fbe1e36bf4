#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use axum::response::IntoResponse;
use axum_extra::extract::{cookie::Key, SignedCookieJar};
use quizgen::{
    completion::{GroqClient, GroqConfig},
    router,
    services::QuizGenerator,
    session::MemorySessionStore,
    AppState,
};
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const PHOTOSYNTHESIS: &str = r#"{"questions":[{"question":"Q1","options":["A","B","C","D"],"correct":"A","explanation":"e1"},{"question":"Q2","options":["A","B","C","D"],"correct":"B","explanation":"e2"}]}"#;

/// An OpenAI-style chat completion body whose only choice carries `content`.
pub fn chat_completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "llama3-70b-8192",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

pub fn completion_mock(content: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion(content)))
}

/// Starts a fake completion API that always answers with `content`.
pub async fn completion_server(content: &str) -> MockServer {
    let server = MockServer::start().await;
    completion_mock(content).mount(&server).await;
    server
}

pub fn groq_config(api_url: &str) -> GroqConfig {
    let mut config = GroqConfig::new("test-key".to_string());
    config.api_url = api_url.to_string();
    config.timeout = Duration::from_secs(5);
    config
}

pub struct TestApp {
    pub router: Router,
    pub sessions: MemorySessionStore,
    pub cookie_key: Key,
}

pub fn test_app(api_url: &str) -> TestApp {
    let client = GroqClient::new(groq_config(api_url)).expect("client should build");
    let sessions = MemorySessionStore::new(Duration::from_secs(600));
    let cookie_key = Key::generate();
    let router = router(AppState {
        generator: QuizGenerator::new(client),
        sessions: sessions.clone(),
        cookie_key: cookie_key.clone(),
        secure_cookies: false,
    });
    TestApp {
        router,
        sessions,
        cookie_key,
    }
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("router should respond")
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut req = Request::builder().method(Method::GET).uri(uri);
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        self.send(req.body(Body::empty()).expect("request build should succeed"))
            .await
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut req = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        self.send(
            req.body(Body::from(body.to_string()))
                .expect("request build should succeed"),
        )
        .await
    }

    /// A `quiz_session` cookie for `session_id`, signed the way the app signs it.
    pub fn signed_cookie(&self, session_id: &str) -> String {
        let jar = SignedCookieJar::new(self.cookie_key.clone())
            .add(quizgen::utils::session_cookie(session_id.to_string(), false));
        session_cookie(&jar.into_response()).expect("jar should set the session cookie")
    }

    /// Generates a quiz and returns the session cookie to send back.
    pub async fn start_quiz(&self, topic: &str, num_questions: u32) -> String {
        let resp = self
            .post_form(
                "/generate",
                &format!("topic={topic}&num_questions={num_questions}"),
                None,
            )
            .await;
        assert_redirect(&resp, "/quiz");
        session_cookie(&resp).expect("generation should set the session cookie")
    }
}

/// The `name=value` pair of the session cookie set by `resp`, if any.
pub fn session_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("quiz_session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub fn assert_redirect(resp: &Response<Body>, to: &str) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some(to)
    );
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}
