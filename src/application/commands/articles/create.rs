// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleForm, AuthContext},
        error::ApplicationResult,
    },
    domain::article::NewArticle,
};

pub struct CreateArticleCommand {
    pub form: ArticleForm,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        auth: &AuthContext,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let username = auth.require_login()?;
        let content = command.form.validate()?;

        let new_article = NewArticle::new(content, self.clock.now());
        let created = self.write_repo.insert(new_article).await?;

        tracing::info!(article_id = %created.id, user = %username, "article created");
        Ok(created.into())
    }
}
