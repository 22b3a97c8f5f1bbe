use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{
    article::{Article, ArticleContent, ArticleId},
    errors::ValidationErrors,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            author: article.author.into(),
            body: article.body.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Raw fields posted by the create and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, alias = "body")]
    pub content: String,
}

impl ArticleForm {
    pub fn validate(&self) -> Result<ArticleContent, ValidationErrors> {
        ArticleContent::new(
            self.title.clone(),
            self.author.clone(),
            self.content.clone(),
        )
    }
}

impl From<&ArticleDto> for ArticleForm {
    fn from(article: &ArticleDto) -> Self {
        Self {
            title: article.title.clone(),
            author: article.author.clone(),
            content: article.body.clone(),
        }
    }
}

/// Parses an id taken from the request path. Anything that cannot name an
/// article is reported as not found.
pub fn parse_article_id(raw: &str) -> ApplicationResult<ArticleId> {
    raw.parse::<ArticleId>()
        .map_err(|_| ApplicationError::not_found(format!("article '{raw}' not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_accepts_body_alias_and_missing_fields() {
        let form: ArticleForm = serde_urlencoded::from_str("title=Hi&body=text").unwrap();
        assert_eq!(form.title, "Hi");
        assert_eq!(form.author, "");
        assert_eq!(form.content, "text");
    }

    #[test]
    fn unparsable_ids_are_not_found() {
        assert!(matches!(
            parse_article_id("abc"),
            Err(ApplicationError::NotFound(_))
        ));
        assert!(matches!(
            parse_article_id("-1"),
            Err(ApplicationError::NotFound(_))
        ));
        assert_eq!(parse_article_id("5").unwrap(), ArticleId(5));
    }

    #[test]
    fn validate_reports_content_field() {
        let form = ArticleForm {
            title: "Hello".into(),
            author: "Ann".into(),
            content: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.for_field("content").is_some());
    }
}
