// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleAuthor, ArticleBody, ArticleId, ArticleTitle};
use crate::domain::errors::ValidationErrors;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub author: ArticleAuthor,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn set_content(&mut self, content: ArticleContent, now: DateTime<Utc>) {
        self.title = content.title;
        self.author = content.author;
        self.body = content.body;
        self.updated_at = now;
    }
}

/// The user-editable part of an article, validated as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent {
    pub title: ArticleTitle,
    pub author: ArticleAuthor,
    pub body: ArticleBody,
}

impl ArticleContent {
    /// Validates every field and reports all failures at once.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let title = errors.check("title", ArticleTitle::new(title));
        let author = errors.check("author", ArticleAuthor::new(author));
        let body = errors.check("content", ArticleBody::new(body));

        match (title, author, body) {
            (Some(title), Some(author), Some(body)) => Ok(Self {
                title,
                author,
                body,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(content: ArticleContent, created_at: DateTime<Utc>) -> Self {
        Self {
            content,
            created_at,
        }
    }
}

/// Full replacement of an article's content.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub content: ArticleContent,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleUpdate {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            content: ArticleContent {
                title: article.title.clone(),
                author: article.author.clone(),
                body: article.body.clone(),
            },
            updated_at: article.updated_at,
        }
    }
}
