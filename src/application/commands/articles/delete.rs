// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{
    dto::{AuthContext, parse_article_id},
    error::{ApplicationError, ApplicationResult},
};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        auth: &AuthContext,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let username = auth.require_login()?;
        let id = parse_article_id(&command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.write_repo.delete(id).await?;

        tracing::info!(article_id = %id, user = %username, "article deleted");
        Ok(())
    }
}
