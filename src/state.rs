use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::storage::Storage;
use crate::stores::{BookingStore, FacilityStore, SessionStore, UserStore};

/// Every shared store, built once at startup and shared by handle.
///
/// The signed-in user is not part of it: the server serves many visitors,
/// so the session is provided per client by [`client_session`].
#[derive(Clone)]
pub struct AppState {
    pub facilities: Arc<FacilityStore>,
    pub users: Arc<UserStore>,
    pub bookings: Arc<BookingStore>,
}

/// Point-in-time figures for the admin dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_facilities: usize,
    pub total_bookings: usize,
    pub active_facilities: usize,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            facilities: Arc::new(FacilityStore::seeded()),
            users: Arc::new(UserStore::load(storage)),
            bookings: Arc::new(BookingStore::default()),
        }
    }

    /// State for a render that was not handed one: browser storage on the
    /// client, throwaway memory when rendering on the server.
    pub fn detached() -> Self {
        #[cfg(feature = "ssr")]
        let storage: Arc<dyn Storage> = Arc::new(crate::storage::MemoryStorage::default());
        #[cfg(not(feature = "ssr"))]
        let storage: Arc<dyn Storage> = Arc::new(crate::storage::LocalStorage);
        Self::new(storage)
    }

    pub fn stats(&self) -> DashboardStats {
        let facilities = self.facilities.snapshot();
        DashboardStats {
            total_users: self.users.snapshot().len(),
            total_facilities: facilities.len(),
            total_bookings: self.bookings.snapshot().len(),
            active_facilities: facilities.iter().filter(|f| f.is_visible()).count(),
        }
    }
}

/// Session of whoever is viewing the page.
///
/// Only the browser knows it. A server render gets a fresh signed-out
/// session that is dropped with the request.
pub fn client_session() -> Arc<SessionStore> {
    #[cfg(feature = "ssr")]
    let storage: Arc<dyn Storage> = Arc::new(crate::storage::MemoryStorage::default());
    #[cfg(not(feature = "ssr"))]
    let storage: Arc<dyn Storage> = Arc::new(crate::storage::LocalStorage);
    Arc::new(SessionStore::load(storage))
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::models::user::{Role, User};

    #[test]
    fn every_server_render_starts_signed_out() {
        let first = client_session();
        first.sign_in(User::new(1, "root@turf.in", Role::SuperAdmin));

        let second = client_session();
        assert!(second.current().is_none());
        assert!(first.current().is_some());
    }
}
