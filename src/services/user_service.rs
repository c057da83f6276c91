//! User service - Handles user-related use cases.
//!
//! A thin persistence-access layer: every operation delegates to the
//! repository. Create and update run inside a Unit of Work transaction
//! so each mutating request commits or rolls back as a whole.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{User, UserDraft};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn find(&self, id: i64) -> AppResult<User>;

    /// Create a new user, assigning its id
    async fn create(&self, draft: UserDraft) -> AppResult<User>;

    /// Overwrite every mutable field of an existing user
    async fn update(&self, id: i64, draft: UserDraft) -> AppResult<User>;

    /// Delete user by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.uow.users().list().await
    }

    async fn find(&self, id: i64) -> AppResult<User> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound(id))
    }

    async fn create(&self, draft: UserDraft) -> AppResult<User> {
        with_transaction!(self.uow, |ctx| ctx.users().insert(draft).await)
    }

    async fn update(&self, id: i64, draft: UserDraft) -> AppResult<User> {
        // Lookup, overwrite and merge share one all-or-nothing transaction
        with_transaction!(self.uow, |ctx| {
            let mut user = ctx
                .users()
                .find_by_id(id)
                .await?
                .ok_or(AppError::UserNotFound(id))?;

            user.apply(draft);
            ctx.users().save(user).await
        })
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        // The repository delete itself is a no-op for absent rows; the
        // lookup is what turns a missing id into a 404.
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound(id))?;

        self.uow.users().delete(id).await
    }
}
