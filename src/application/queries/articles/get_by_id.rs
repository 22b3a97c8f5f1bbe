use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, AuthContext, parse_article_id},
    error::{ApplicationError, ApplicationResult},
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = parse_article_id(&query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }

    /// Loads an article for the edit and delete forms, which are only
    /// available once logged in. The login check happens before the lookup.
    pub async fn get_article_for_change(
        &self,
        auth: &AuthContext,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        auth.require_login()?;
        self.get_article_by_id(query).await
    }
}
