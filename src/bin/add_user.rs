// src/bin/add_user.rs
use anyhow::{Context, Result, bail};
use chrono::Utc;
use folio::config::AppConfig;
use folio::domain::user::{NewUser, UserRepository, Username};
use folio::infrastructure::{database, repositories::SqliteUserRepository};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let Some(raw) = env::args().nth(1) else {
        bail!("usage: add_user <username>");
    };
    let username = Username::new(raw).context("invalid username")?;

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), 1).await?;
    database::run_migrations(&pool).await?;

    let repo = SqliteUserRepository::new(Arc::new(pool));
    let user = repo
        .insert(NewUser::new(username, Utc::now()))
        .await
        .context("failed to create user")?;

    println!("created user '{}' (id {})", user.username, i64::from(user.id));
    Ok(())
}
