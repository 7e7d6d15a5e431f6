use leptos::logging::{error, log, warn};
use std::sync::Arc;

use crate::config::SESSION_KEY;
use crate::error::StorageError;
use crate::models::user::User;
use crate::storage::Storage;
use crate::stores::subject::{Snapshots, Subject};

/// The signed-in user, if any. The login flow writes it; guards read it.
pub struct SessionStore {
    current: Subject<Option<User>>,
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let current = match storage.get(SESSION_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<User>(&raw)
                .map_err(|err| warn!("[SESSION] Discarding malformed session: {}", err))
                .ok(),
            Ok(None) => None,
            Err(err) => {
                warn!("[SESSION] Could not read session: {}", err);
                None
            }
        };

        Self {
            current: Subject::new(current),
            storage,
        }
    }

    pub fn current(&self) -> Option<User> {
        self.current.get()
    }

    pub fn watch(&self) -> Snapshots<Option<User>> {
        self.current.subscribe()
    }

    pub fn sign_in(&self, user: User) {
        log!("[SESSION] {} signed in as {}", user.email, user.role);
        self.current.modify(|current| {
            let written = serde_json::to_string(&user)
                .map_err(StorageError::from)
                .and_then(|raw| self.storage.set(SESSION_KEY, &raw));
            if let Err(err) = written {
                error!("[SESSION] Failed to persist session: {}", err);
            }
            *current = Some(user);
            true
        });
    }

    pub fn sign_out(&self) {
        let signed_out = self.current.modify(|current| {
            if current.take().is_none() {
                return false;
            }
            if let Err(err) = self.storage.remove(SESSION_KEY) {
                error!("[SESSION] Failed to clear session: {}", err);
            }
            true
        });
        if signed_out {
            log!("[SESSION] Signed out");
        }
    }
}
