use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleForm, AuthContext, parse_article_id},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleUpdate,
};

pub struct UpdateArticleCommand {
    pub id: String,
    pub form: ArticleForm,
}

impl ArticleCommandService {
    /// Replaces title, author and body of an existing article in a single write.
    pub async fn update_article(
        &self,
        auth: &AuthContext,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let username = auth.require_login()?;
        let id = parse_article_id(&command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let content = command.form.validate()?;
        article.set_content(content, self.clock.now());

        let updated = self.write_repo.update(ArticleUpdate::from(&article)).await?;

        tracing::info!(article_id = %updated.id, user = %username, "article updated");
        Ok(updated.into())
    }
}
