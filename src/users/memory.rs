use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repo::{RepoError, UserRepository};
use super::repo_types::{NewUser, User};

/// Users keyed by email, held in process memory.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .read()
            .await
            .get(email)
            .filter(|u| u.password == password)
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(RepoError::DuplicateEmail);
        }
        let user = User::from(user);
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}
