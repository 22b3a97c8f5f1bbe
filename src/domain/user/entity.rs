// src/domain/user/entity.rs
use crate::domain::user::value_objects::{UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(username: Username, created_at: DateTime<Utc>) -> Self {
        Self {
            username,
            created_at,
        }
    }
}
