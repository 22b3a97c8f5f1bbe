pub mod article_repos;
pub mod time;
pub mod user_repo;

pub use article_repos::*;
pub use time::*;
pub use user_repo::*;
