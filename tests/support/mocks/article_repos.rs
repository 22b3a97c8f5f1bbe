// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use folio::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;

/// Article store kept in memory; serves as both read and write repository.
#[derive(Default)]
pub struct InMemoryArticleStore {
    inner: Mutex<StoreState>,
}

#[derive(Default)]
struct StoreState {
    articles: Vec<Article>,
    last_id: i64,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(
        &self,
        title: &str,
        author: &str,
        body: &str,
        created_at: DateTime<Utc>,
    ) -> Article {
        let content = ArticleContent::new(title, author, body).expect("valid seed article");
        let mut state = self.inner.lock().unwrap();
        state.last_id += 1;
        let article = Article {
            id: ArticleId::new(state.last_id).unwrap(),
            title: content.title,
            author: content.author,
            body: content.body,
            created_at,
            updated_at: created_at,
        };
        state.articles.push(article.clone());
        article
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        let state = self.inner.lock().unwrap();
        state.articles.iter().find(|a| a.id.0 == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().articles.len()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        state.last_id += 1;
        let created = Article {
            id: ArticleId::new(state.last_id)?,
            title: article.content.title,
            author: article.content.author,
            body: article.content.body,
            created_at: article.created_at,
            updated_at: article.created_at,
        };
        state.articles.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        let article = state
            .articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound(format!("article {}", update.id)))?;
        article.title = update.content.title;
        article.author = update.content.author;
        article.body = update.content.body;
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|a| a.id != id);
        if state.articles.len() == before {
            return Err(DomainError::NotFound(format!("article {id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.inner.lock().unwrap();
        Ok(state.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn list_newest_first(&self) -> DomainResult<Vec<Article>> {
        let state = self.inner.lock().unwrap();
        let mut articles = state.articles.clone();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(articles)
    }
}

/// Write repository whose every operation fails with a persistence error.
pub struct FailingArticleWrite;

#[async_trait]
impl ArticleWriteRepository for FailingArticleWrite {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(DomainError::Persistence("article store unavailable".into()))
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        Err(DomainError::Persistence("article store unavailable".into()))
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(DomainError::Persistence("article store unavailable".into()))
    }
}
