mod html;

pub use html::HtmlViewRenderer;

use crate::application::dto::{ArticleDto, ArticleForm};
use crate::domain::errors::ValidationErrors;
use thiserror::Error;

/// A page together with the data it displays.
#[derive(Debug, Clone)]
pub enum View {
    Index {
        articles: Vec<ArticleDto>,
        logged_in: bool,
    },
    New {
        form: ArticleForm,
        errors: ValidationErrors,
    },
    /// `id` is the article being edited, kept even when the form is redisplayed
    /// after a rejected submission.
    Edit {
        id: i64,
        form: ArticleForm,
        errors: ValidationErrors,
    },
    Show {
        article: ArticleDto,
        logged_in: bool,
    },
    Delete {
        article: ArticleDto,
    },
}

impl View {
    pub fn template_name(&self) -> &'static str {
        match self {
            View::Index { .. } => "articles/index",
            View::New { .. } => "articles/new",
            View::Edit { .. } => "articles/edit",
            View::Show { .. } => "articles/show",
            View::Delete { .. } => "articles/delete",
        }
    }
}

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("failed to render {template}: {source}")]
    Format {
        template: &'static str,
        #[source]
        source: std::fmt::Error,
    },
}

pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &View) -> Result<String, ViewError>;
}
