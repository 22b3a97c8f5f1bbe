// tests/support/helpers.rs
use super::mocks::{FailingArticleWrite, InMemoryArticleStore, InMemoryUserRepo, StepClock};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, Response, header};
use folio::application::{ports::time::Clock, services::ApplicationServices};
use folio::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    user::UserRepository,
};
use folio::presentation::http::{
    routes::build_router,
    state::HttpState,
    views::{HtmlViewRenderer, ViewRenderer},
};
use std::sync::Arc;

/// Username known to the default test user store.
pub const KNOWN_USER: &str = "ann";

pub struct TestApp {
    pub router: Router,
    pub articles: Arc<InMemoryArticleStore>,
}

pub fn build_state(
    user_repo: Arc<dyn UserRepository>,
    articles: Arc<InMemoryArticleStore>,
) -> HttpState {
    let article_write: Arc<dyn ArticleWriteRepository> = articles.clone();
    build_state_with_writes(user_repo, article_write, articles)
}

fn build_state_with_writes(
    user_repo: Arc<dyn UserRepository>,
    article_write: Arc<dyn ArticleWriteRepository>,
    articles: Arc<InMemoryArticleStore>,
) -> HttpState {
    let article_read: Arc<dyn ArticleReadRepository> = articles;
    let clock: Arc<dyn Clock> = Arc::new(StepClock::new());

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        article_write,
        article_read,
        clock,
    ));
    let renderer: Arc<dyn ViewRenderer> = Arc::new(HtmlViewRenderer::new("Folio"));

    HttpState { services, renderer }
}

pub fn make_test_app() -> TestApp {
    make_test_app_with_users(Arc::new(InMemoryUserRepo::with_usernames(&[KNOWN_USER])))
}

pub fn make_test_app_with_users(user_repo: Arc<dyn UserRepository>) -> TestApp {
    let articles = Arc::new(InMemoryArticleStore::new());
    let router = build_router(build_state(user_repo, Arc::clone(&articles)));
    TestApp { router, articles }
}

/// Reads succeed against the in-memory store; every write fails.
pub fn make_test_app_with_failing_writes() -> TestApp {
    let user_repo = Arc::new(InMemoryUserRepo::with_usernames(&[KNOWN_USER]));
    let articles = Arc::new(InMemoryArticleStore::new());
    let state = build_state_with_writes(
        user_repo,
        Arc::new(FailingArticleWrite),
        Arc::clone(&articles),
    );
    TestApp {
        router: build_router(state),
        articles,
    }
}

fn with_login(
    builder: axum::http::request::Builder,
    username: Option<&str>,
) -> axum::http::request::Builder {
    match username {
        Some(name) => builder.header(header::COOKIE, format!("theme=dark; username={name}")),
        None => builder,
    }
}

pub fn get(uri: &str, username: Option<&str>) -> Request<Body> {
    with_login(Request::builder().method(Method::GET).uri(uri), username)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)], username: Option<&str>) -> Request<Body> {
    let encoded = serde_urlencoded::to_string(fields).unwrap();
    with_login(Request::builder().method(Method::POST).uri(uri), username)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encoded))
        .unwrap()
}

pub fn post_raw(
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
    username: Option<&str>,
) -> Request<Body> {
    let mut builder = with_login(Request::builder().method(Method::POST).uri(uri), username);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    builder.body(Body::from(body)).unwrap()
}

pub fn location<B>(resp: &Response<B>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub async fn body_text(resp: axum::response::Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8_lossy(&bytes).into_owned()
}
