use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::auth::application::domain::entities::{PendingCode, UserId};
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserQuery, UserQueryError, UserQueryResult, UserRepository,
    UserRepositoryError, UserResult,
};

/// Process-local user store.
///
/// A single async mutex guards every read and write, so the uniqueness
/// check and the insert in `create_user` happen as one step.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<HashMap<UserId, UserQueryResult>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.users.lock().await.len()
    }

    async fn find_by<F>(&self, predicate: F) -> Option<UserQueryResult>
    where
        F: Fn(&UserQueryResult) -> bool,
    {
        self.users
            .lock()
            .await
            .values()
            .find(|user| predicate(user))
            .cloned()
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.users.lock().await.get(&user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.find_by(|user| user.email == email).await)
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.find_by(|user| user.username == username).await)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let mut users = self.users.lock().await;

        if users
            .values()
            .any(|user| user.username == data.username || user.email == data.email)
        {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let now = Utc::now();
        let user = UserQueryResult {
            id: UserId::new(),
            username: data.username,
            email: data.email,
            password: data.password,
            is_verified: false,
            pending_code: Some(data.pending_code),
            created_at: now,
            updated_at: now,
        };

        let result = UserResult {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_verified: user.is_verified,
        };
        users.insert(user.id, user);

        Ok(result)
    }

    async fn reissue_verification(
        &self,
        user_id: UserId,
        password: String,
        pending_code: PendingCode,
    ) -> Result<(), UserRepositoryError> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(&user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        if user.is_verified {
            return Err(UserRepositoryError::UserAlreadyVerified);
        }

        user.password = password;
        user.pending_code = Some(pending_code);
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn activate_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(&user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        user.is_verified = true;
        user.pending_code = None;
        user.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::VerificationCode;

    fn data(username: &str, email: &str) -> CreateUserData {
        CreateUserData {
            username: username.to_string(),
            email: email.to_string(),
            password: "pw1".to_string(),
            pending_code: PendingCode::issue(VerificationCode::from_number(1), Utc::now()),
        }
    }

    #[tokio::test]
    async fn create_then_find_by_each_key() {
        let store = InMemoryUserStore::new();

        let created = store.create_user(data("alice", "a@x.io")).await.unwrap();

        let by_id = store.find_by_id(created.id).await.unwrap().unwrap();
        let by_email = store.find_by_email("a@x.io").await.unwrap().unwrap();
        let by_username = store.find_by_username("alice").await.unwrap().unwrap();

        assert_eq!(by_id.id, created.id);
        assert_eq!(by_email.id, created.id);
        assert_eq!(by_username.id, created.id);
        assert!(!by_id.is_verified);
        assert!(by_id.pending_code.is_some());
    }

    #[tokio::test]
    async fn duplicate_username_or_email_is_rejected() {
        let store = InMemoryUserStore::new();
        store.create_user(data("alice", "a@x.io")).await.unwrap();

        let same_email = store.create_user(data("bob", "a@x.io")).await;
        let same_username = store.create_user(data("alice", "b@x.io")).await;

        assert!(matches!(same_email, Err(UserRepositoryError::UserAlreadyExists)));
        assert!(matches!(same_username, Err(UserRepositoryError::UserAlreadyExists)));
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn lookups_are_case_sensitive() {
        let store = InMemoryUserStore::new();
        store.create_user(data("alice", "a@x.io")).await.unwrap();

        assert!(store.find_by_email("A@X.IO").await.unwrap().is_none());
        assert!(store.find_by_username("Alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn activate_clears_pending_code() {
        let store = InMemoryUserStore::new();
        let created = store.create_user(data("alice", "a@x.io")).await.unwrap();

        store.activate_user(created.id).await.unwrap();

        let user = store.find_by_id(created.id).await.unwrap().unwrap();
        assert!(user.is_verified);
        assert!(user.pending_code.is_none());
    }

    #[tokio::test]
    async fn reissue_is_refused_once_verified() {
        let store = InMemoryUserStore::new();
        let created = store.create_user(data("alice", "a@x.io")).await.unwrap();
        store.activate_user(created.id).await.unwrap();

        let result = store
            .reissue_verification(
                created.id,
                "pw2".to_string(),
                PendingCode::issue(VerificationCode::from_number(2), Utc::now()),
            )
            .await;

        assert!(matches!(result, Err(UserRepositoryError::UserAlreadyVerified)));
        let user = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(user.password, "pw1");
        assert!(user.pending_code.is_none());
    }

    #[tokio::test]
    async fn writes_to_unknown_user_fail() {
        let store = InMemoryUserStore::new();

        assert!(matches!(
            store.activate_user(UserId::new()).await,
            Err(UserRepositoryError::UserNotFound)
        ));
    }
}
