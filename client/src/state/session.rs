//! Phone-OTP session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is an explicit object loaded from localStorage once at
//! startup; route guards and pages read it from context instead of touching
//! storage directly. Persistence is write-through: every transition that
//! changes credentials also updates storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the authenticated flag, kept as the string `"true"`.
pub const AUTHENTICATED_KEY: &str = "isAuthenticated";
/// Storage key for the phone number awaiting OTP verification.
pub const PENDING_PHONE_KEY: &str = "pendingPhone";

/// Session state tracking credentials and the login-in-progress phone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub authenticated: bool,
    /// Phone number that an OTP was requested for but not yet verified.
    pub pending_phone: Option<String>,
    /// False until storage has been consulted. Guards must not redirect
    /// before the persisted session has had a chance to load.
    pub loaded: bool,
}

impl SessionState {
    /// Rebuild a session from raw storage values. The authenticated flag
    /// only counts when a token is actually present.
    #[must_use]
    pub fn from_storage_values(
        token: Option<String>,
        authenticated_flag: Option<String>,
        pending_phone: Option<String>,
    ) -> Self {
        let authenticated = authenticated_flag.as_deref() == Some("true") && token.is_some();
        Self { token, authenticated, pending_phone, loaded: true }
    }

    /// Record that an OTP was requested for `phone`.
    pub fn begin_login(&mut self, phone: String) {
        self.pending_phone = Some(phone);
    }

    /// Record a verified login.
    pub fn complete_login(&mut self, token: String) {
        self.token = Some(token);
        self.authenticated = true;
        self.pending_phone = None;
    }

    /// Drop credentials, e.g. after the server rejects the token. The
    /// pending phone survives so a re-login can prefill it.
    pub fn clear_credentials(&mut self) {
        self.token = None;
        self.authenticated = false;
    }
}

/// Load the persisted session. Outside the browser this yields a loaded,
/// unauthenticated session.
#[must_use]
pub fn load_from_storage() -> SessionState {
    SessionState::from_storage_values(
        storage::load_string(TOKEN_KEY),
        storage::load_string(AUTHENTICATED_KEY),
        storage::load_string(PENDING_PHONE_KEY),
    )
}

/// Persist the phone number awaiting verification.
pub fn persist_pending_phone(phone: &str) {
    storage::save_string(PENDING_PHONE_KEY, phone);
}

/// Persist a verified login and clear the pending phone.
pub fn persist_login(token: &str) {
    storage::save_string(TOKEN_KEY, token);
    storage::save_string(AUTHENTICATED_KEY, "true");
    storage::remove(PENDING_PHONE_KEY);
}

/// Remove stored credentials.
pub fn clear_persisted_credentials() {
    storage::remove(TOKEN_KEY);
    storage::remove(AUTHENTICATED_KEY);
}
