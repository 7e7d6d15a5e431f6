use futures::{Stream, StreamExt};
use leptos::logging::{error, log, warn};
use std::sync::Arc;

use crate::config::USERS_KEY;
use crate::error::StorageError;
use crate::models::user::{User, UserId};
use crate::storage::Storage;
use crate::stores::subject::{Snapshots, Subject};

/// Registered users, mirrored to durable storage on every change.
pub struct UserStore {
    users: Subject<Vec<User>>,
    storage: Arc<dyn Storage>,
    key: String,
}

impl UserStore {
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        Self::load_from(storage, USERS_KEY)
    }

    /// Reads the user list stored under `key`. Anything unreadable counts as no users.
    pub fn load_from(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let users = match storage.get(&key) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<User>>(&raw).unwrap_or_else(|err| {
                warn!("[USERS] Stored user list under '{}' is malformed: {}", key, err);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("[USERS] Could not read '{}': {}", key, err);
                Vec::new()
            }
        };
        log!("[USERS] Loaded {} users", users.len());

        Self {
            users: Subject::new(users),
            storage,
            key,
        }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.get()
    }

    pub fn list(&self) -> Snapshots<Vec<User>> {
        self.users.subscribe()
    }

    pub fn count(&self) -> impl Stream<Item = usize> + Send + Unpin + 'static {
        self.list().map(|users| users.len())
    }

    pub fn get_by_id(&self, id: UserId) -> Option<User> {
        self.users.with(|users| users.iter().find(|u| u.id == id).cloned())
    }

    pub fn toggle_ban(&self, id: UserId) {
        let toggled = self.users.modify(|users| {
            let Some(user) = users.iter_mut().find(|u| u.id == id) else {
                return false;
            };
            user.is_banned = !user.is_banned;
            log!("[USERS] User {} banned: {}", id, user.is_banned);
            self.persist(users);
            true
        });
        if !toggled {
            warn!("[USERS] Ban toggle ignored, user {} not found", id);
        }
    }

    fn persist(&self, users: &[User]) {
        let written = serde_json::to_string(users)
            .map_err(StorageError::from)
            .and_then(|raw| self.storage.set(&self.key, &raw));
        if let Err(err) = written {
            error!("[USERS] Failed to persist users under '{}': {}", self.key, err);
        }
    }
}
