// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use folio::domain::errors::{DomainError, DomainResult};
use folio::domain::user::{NewUser, User, UserId, UserRepository, Username};
use std::sync::Mutex;

use super::time::fixed_now;

/// User store backed by a vector.
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn with_usernames(names: &[&str]) -> Self {
        let users = names
            .iter()
            .enumerate()
            .map(|(idx, name)| User {
                id: UserId::new(idx as i64 + 1).unwrap(),
                username: Username::new(*name).unwrap(),
                created_at: fixed_now(),
            })
            .collect();
        Self {
            users: Mutex::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let user = User {
            id: UserId::new(users.len() as i64 + 1)?,
            username: new_user.username,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }
}

/// User store whose lookups always fail.
pub struct FailingUserRepo;

#[async_trait]
impl UserRepository for FailingUserRepo {
    async fn insert(&self, _new_user: NewUser) -> DomainResult<User> {
        Err(DomainError::Persistence("user store unavailable".into()))
    }

    async fn find_by_username(&self, _username: &Username) -> DomainResult<Option<User>> {
        Err(DomainError::Persistence("user store unavailable".into()))
    }
}
