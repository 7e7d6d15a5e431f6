//! Application-wide settings that are not part of the Leptos site options.

/// Storage key holding the JSON-encoded user list.
pub const USERS_KEY: &str = "users";

/// Storage key holding the signed-in user, written by the login flow.
pub const SESSION_KEY: &str = "currentUser";

/// Where guards send visitors who may not enter a view.
pub const LOGIN_PATH: &str = "/login";

/// First bookable hour of the day.
pub const OPENING_HOUR: u8 = 6;

/// Bookings must end by this hour.
pub const CLOSING_HOUR: u8 = 23;

pub const DATABASE_PATH_ENV: &str = "TURFBOOK_DB";
pub const DEFAULT_DATABASE_PATH: &str = "turfbook.db";

/// SQLite file used by the server, overridable through `TURFBOOK_DB`.
pub fn database_path() -> String {
    std::env::var(DATABASE_PATH_ENV).unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string())
}
