//! User service unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::predicate::eq;

use user_api::domain::{User, UserDraft};
use user_api::errors::{AppError, AppResult};
use user_api::infra::{MockUserRepository, TransactionContext, UnitOfWork, UserRepository};
use user_api::services::{UserManager, UserService};

fn create_test_user(id: i64) -> User {
    User {
        id,
        firstname: "Max".to_string(),
        lastname: "Mustermann".to_string(),
        email: "max.mustermann@example.com".to_string(),
        birthday: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        password: "password123".to_string(),
    }
}

fn create_test_draft() -> UserDraft {
    UserDraft {
        firstname: "Max".to_string(),
        lastname: "Mustermann".to_string(),
        email: "max.mustermann@example.com".to_string(),
        birthday: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        password: "password123".to_string(),
    }
}

/// Test mock for UnitOfWork that wraps a MockUserRepository.
///
/// Transactions are exercised by the API integration tests against a
/// real database; here they are unsupported.
struct TestUnitOfWork {
    user_repo: Arc<MockUserRepository>,
}

impl TestUnitOfWork {
    fn new(user_repo: MockUserRepository) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
        }
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}

#[tokio::test]
async fn test_find_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(7))
        .returning(|id| Ok(Some(create_test_user(id))));

    let uow = TestUnitOfWork::new(repo);
    let service = UserManager::new(Arc::new(uow));
    let result = service.find(7).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, 7);
}

#[tokio::test]
async fn test_find_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let uow = TestUnitOfWork::new(repo);
    let service = UserManager::new(Arc::new(uow));
    let result = service.find(42).await;

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::UserNotFound(42)));
    assert_eq!(err.to_string(), "There is no user with the ID 42.");
}

#[tokio::test]
async fn test_find_all_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .returning(|| Ok(vec![create_test_user(1), create_test_user(2)]));

    let uow = TestUnitOfWork::new(repo);
    let service = UserManager::new(Arc::new(uow));
    let result = service.find_all().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 2);
}

#[tokio::test]
async fn test_find_all_empty() {
    let mut repo = MockUserRepository::new();
    repo.expect_list().returning(|| Ok(vec![]));

    let uow = TestUnitOfWork::new(repo);
    let service = UserManager::new(Arc::new(uow));
    let result = service.find_all().await;

    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(7))
        .returning(|id| Ok(Some(create_test_user(id))));
    repo.expect_delete().with(eq(7)).returning(|_| Ok(()));

    let uow = TestUnitOfWork::new(repo);
    let service = UserManager::new(Arc::new(uow));
    let result = service.delete(7).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));
    // No expect_delete: the removal must never be attempted

    let uow = TestUnitOfWork::new(repo);
    let service = UserManager::new(Arc::new(uow));
    let result = service.delete(42).await;

    assert!(matches!(result.unwrap_err(), AppError::UserNotFound(42)));
}

#[tokio::test]
async fn test_create_requires_transaction() {
    // Create runs inside the unit of work; the mock rejects transactions,
    // proving the service routes the insert through the transactional path.
    let repo = MockUserRepository::new();
    let uow = TestUnitOfWork::new(repo);
    let service = UserManager::new(Arc::new(uow));

    let result = service.create(create_test_draft()).await;

    assert!(matches!(result.unwrap_err(), AppError::Internal(_)));
}

#[tokio::test]
async fn test_update_requires_transaction() {
    let repo = MockUserRepository::new();
    let uow = TestUnitOfWork::new(repo);
    let service = UserManager::new(Arc::new(uow));

    let result = service.update(7, create_test_draft()).await;

    assert!(matches!(result.unwrap_err(), AppError::Internal(_)));
}
