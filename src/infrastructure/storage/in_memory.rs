use crate::core::errors::AccountError;
use crate::core::models::User;
use crate::infrastructure::storage::UserStore;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    users: HashMap<String, User>,
    ids_by_email: HashMap<String, String>,
}

/// Both tables sit behind one lock so the email check and the write are atomic.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError> {
        let tables = self.tables.read().await;
        Ok(tables
            .ids_by_email
            .get(email)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AccountError> {
        Ok(self.tables.read().await.users.get(id).cloned())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, AccountError> {
        Ok(self.tables.read().await.users.contains_key(id))
    }

    async fn save(&self, mut user: User) -> Result<User, AccountError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();

        match user.id.clone() {
            None => {
                if tables.ids_by_email.contains_key(&user.email) {
                    return Err(AccountError::AlreadyExists(user.email));
                }
                let id = Uuid::new_v4().to_string();
                user.id = Some(id.clone());
                user.created_at = now;
                user.updated_at = now;
                tables.ids_by_email.insert(user.email.clone(), id.clone());
                tables.users.insert(id, user.clone());
            }
            Some(id) => {
                let previous_email = tables
                    .users
                    .get(&id)
                    .map(|existing| existing.email.clone())
                    .ok_or_else(|| AccountError::NotFound(format!("User with id {}", id)))?;
                if let Some(owner) = tables.ids_by_email.get(&user.email) {
                    if *owner != id {
                        return Err(AccountError::AlreadyExists(user.email));
                    }
                }
                tables.ids_by_email.remove(&previous_email);
                tables.ids_by_email.insert(user.email.clone(), id.clone());
                user.updated_at = now;
                tables.users.insert(id, user.clone());
            }
        }
        Ok(user)
    }

    async fn delete(&self, user: &User) -> Result<(), AccountError> {
        let id = user
            .id
            .as_deref()
            .ok_or_else(|| AccountError::Storage("Cannot delete a user without an id".to_string()))?;
        let mut tables = self.tables.write().await;
        if let Some(removed) = tables.users.remove(id) {
            tables.ids_by_email.remove(&removed.email);
        }
        Ok(())
    }
}
