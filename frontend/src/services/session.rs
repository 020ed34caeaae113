use gloo::storage::{LocalStorage, Storage};
use shared::UserIdentity;

use crate::services::logging::Logger;

/// Key under which the login page stores the signed-in user
pub const USER_KEY: &str = "user";
/// Flag the login page sets alongside the user record
pub const AUTHENTICATED_KEY: &str = "isAuthenticated";

/// Reads the signed-in user once at startup.
///
/// Returns `None` when nobody is signed in or the stored record has no username.
pub fn load_identity() -> Option<UserIdentity> {
    match LocalStorage::get::<UserIdentity>(USER_KEY) {
        Ok(identity) if !identity.username.trim().is_empty() => Some(identity),
        Ok(_) => None,
        Err(e) => {
            Logger::debug_with_component("session", &format!("No stored user: {}", e));
            None
        }
    }
}

/// Forgets the signed-in user
pub fn clear_session() {
    LocalStorage::delete(AUTHENTICATED_KEY);
    LocalStorage::delete(USER_KEY);
}
