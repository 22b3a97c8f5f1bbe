// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleForm, parse_article_id},
    queries::articles::GetArticleByIdQuery,
};
use crate::domain::errors::ValidationErrors;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::LoginState;
use crate::presentation::http::routes::ARTICLES_PATH;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::View;
use axum::{
    Extension, Form,
    extract::{Path, rejection::FormRejection},
    response::{Html, IntoResponse, Redirect, Response},
};

fn render(state: &HttpState, view: View) -> HttpResult<Response> {
    let html = state.renderer.render(&view)?;
    Ok(Html(html).into_response())
}

/// A missing or undecodable body counts as an empty form, so the login check
/// and field validation still decide the response.
fn submitted_form(form: Result<Form<ArticleForm>, FormRejection>) -> ArticleForm {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable form body, treating as empty");
            ArticleForm::default()
        }
    }
}

fn redirect_to_article(id: i64) -> Response {
    Redirect::to(&format!("{ARTICLES_PATH}/{id}")).into_response()
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    LoginState(auth): LoginState,
) -> HttpResult<Response> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;

    render(
        &state,
        View::Index {
            articles,
            logged_in: auth.is_logged_in(),
        },
    )
}

pub async fn new_article_form(
    Extension(state): Extension<HttpState>,
    LoginState(auth): LoginState,
) -> HttpResult<Response> {
    auth.require_login().into_http()?;

    render(
        &state,
        View::New {
            form: ArticleForm::default(),
            errors: ValidationErrors::default(),
        },
    )
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    LoginState(auth): LoginState,
    form: Result<Form<ArticleForm>, FormRejection>,
) -> HttpResult<Response> {
    let form = submitted_form(form);
    let command = CreateArticleCommand { form: form.clone() };

    match state
        .services
        .article_commands
        .create_article(&auth, command)
        .await
        .into_http_or_form()?
    {
        Ok(article) => Ok(redirect_to_article(article.id)),
        Err(errors) => render(&state, View::New { form, errors }),
    }
}

pub async fn edit_article_form(
    Extension(state): Extension<HttpState>,
    LoginState(auth): LoginState,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_for_change(&auth, GetArticleByIdQuery { id })
        .await
        .into_http()?;

    render(
        &state,
        View::Edit {
            id: article.id,
            form: ArticleForm::from(&article),
            errors: ValidationErrors::default(),
        },
    )
}

pub async fn show_article(
    Extension(state): Extension<HttpState>,
    LoginState(auth): LoginState,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    render(
        &state,
        View::Show {
            article,
            logged_in: auth.is_logged_in(),
        },
    )
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    LoginState(auth): LoginState,
    Path(id): Path<String>,
    form: Result<Form<ArticleForm>, FormRejection>,
) -> HttpResult<Response> {
    let form = submitted_form(form);
    let command = UpdateArticleCommand {
        id: id.clone(),
        form: form.clone(),
    };

    match state
        .services
        .article_commands
        .update_article(&auth, command)
        .await
        .into_http_or_form()?
    {
        Ok(article) => Ok(redirect_to_article(article.id)),
        Err(errors) => {
            // The article was found before validation ran, so the id parses.
            let id = parse_article_id(&id).into_http()?;
            render(
                &state,
                View::Edit {
                    id: id.into(),
                    form,
                    errors,
                },
            )
        }
    }
}

pub async fn delete_article_form(
    Extension(state): Extension<HttpState>,
    LoginState(auth): LoginState,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_for_change(&auth, GetArticleByIdQuery { id })
        .await
        .into_http()?;

    render(&state, View::Delete { article })
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    LoginState(auth): LoginState,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    state
        .services
        .article_commands
        .delete_article(&auth, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Redirect::to(ARTICLES_PATH).into_response())
}
