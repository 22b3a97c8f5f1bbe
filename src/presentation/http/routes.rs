// src/presentation/http/routes.rs
use crate::presentation::http::controllers::articles;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    response::Redirect,
    routing::get,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub const ARTICLES_PATH: &str = "/articles";

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/articles/",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/articles/new", get(articles::new_article_form))
        .route("/articles/{id}", get(articles::show_article))
        .route(
            "/articles/{id}/edit",
            get(articles::edit_article_form).post(articles::update_article),
        )
        .route(
            "/articles/{id}/delete",
            get(articles::delete_article_form).post(articles::delete_article),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

async fn home() -> Redirect {
    Redirect::to(ARTICLES_PATH)
}
