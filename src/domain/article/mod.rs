pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleContent, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleAuthor, ArticleBody, ArticleId, ArticleTitle};
