//! Account operations.

use chrono::Utc;
use common::{NewUser, User, UserId, UserUpdate};
use entity_store::MemStorage;

use crate::error::DomainError;

/// User accounts. Email and username are unique across all users,
/// checked on create under the write guard so two concurrent creates
/// with the same email cannot both succeed.
#[derive(Clone)]
pub struct UserService {
    storage: MemStorage,
}

impl UserService {
    /// Creates a user service over the given store.
    pub fn new(storage: MemStorage) -> Self {
        Self { storage }
    }

    /// Registers a new account, rejecting duplicate email or username.
    #[tracing::instrument(skip(self, new), fields(username = %new.username))]
    pub async fn create_user(&self, new: NewUser) -> Result<User, DomainError> {
        let mut tables = self.storage.write().await;

        if tables.users.iter().any(|user| user.email == new.email) {
            return Err(DomainError::DuplicateEmail { email: new.email });
        }
        if tables.users.iter().any(|user| user.username == new.username) {
            return Err(DomainError::DuplicateUsername {
                username: new.username,
            });
        }

        Ok(tables.users.insert(|id| User {
            id,
            username: new.username,
            email: new.email,
            password: new.password,
            full_name: new.full_name,
            phone: new.phone,
            address: new.address,
            created_at: Utc::now(),
        }))
    }

    /// Lookup by id.
    #[tracing::instrument(skip(self))]
    pub async fn user(&self, id: UserId) -> Option<User> {
        let tables = self.storage.read().await;
        tables.users.get(id).cloned()
    }

    /// Lookup by exact email.
    #[tracing::instrument(skip(self, email))]
    pub async fn user_by_email(&self, email: &str) -> Option<User> {
        let tables = self.storage.read().await;
        let user = tables.users.iter().find(|user| user.email == email).cloned();
        user
    }

    /// Lookup by exact username.
    #[tracing::instrument(skip(self))]
    pub async fn user_by_username(&self, username: &str) -> Option<User> {
        let tables = self.storage.read().await;
        let user = tables
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned();
        user
    }

    /// Applies a profile patch. `None` when the id is absent.
    #[tracing::instrument(skip(self, updates))]
    pub async fn update_user(&self, id: UserId, updates: UserUpdate) -> Option<User> {
        let mut tables = self.storage.write().await;
        tables.users.update(id, |user| {
            if let Some(password) = updates.password {
                user.password = password;
            }
            if let Some(full_name) = updates.full_name {
                user.full_name = full_name;
            }
            if let Some(phone) = updates.phone {
                user.phone = Some(phone);
            }
            if let Some(address) = updates.address {
                user.address = Some(address);
            }
        })
    }
}
