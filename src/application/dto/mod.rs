pub mod articles;
pub mod auth;

pub use articles::{ArticleDto, ArticleForm, parse_article_id};
pub use auth::AuthContext;
