// ============================================================================
// AUTH STORE - single authority for "is someone logged in, and who"
// ============================================================================
// Plain state struct compatible with use_state_handle; the use_auth hook
// owns one of these and applies the transitions below.
// ============================================================================

use crate::auth::error::AuthError;
use crate::auth::session::UserInfo;

/// Lifecycle phase derived from the store fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Unauthenticated,
    Authenticating,
    Authenticated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthStore {
    /// Current session, absent when nobody is logged in.
    pub user: Option<UserInfo>,
    /// True only while a login is in flight.
    pub loading: bool,
    /// Last login failure, cleared on the next attempt and on logout.
    pub error: Option<AuthError>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self {
            user: None,
            loading: false,
            error: None,
        }
    }
}

impl AuthStore {
    pub fn phase(&self) -> AuthPhase {
        if self.user.is_some() {
            AuthPhase::Authenticated
        } else if self.loading {
            AuthPhase::Authenticating
        } else {
            AuthPhase::Unauthenticated
        }
    }

    /// Start a login attempt. Overlapping attempts are allowed; whichever
    /// completion lands last wins.
    pub fn begin_login(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record the outcome of a login attempt. Always clears the loading
    /// flag, whatever the result.
    pub fn complete_login(&mut self, result: Result<UserInfo, AuthError>) {
        self.loading = false;
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.error = None;
            }
            Err(err) => {
                self.user = None;
                self.error = Some(err);
            }
        }
    }

    /// Clear the session unconditionally. Synchronous, cannot fail.
    pub fn logout(&mut self) {
        self.user = None;
        self.loading = false;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user() -> UserInfo {
        UserInfo {
            name: "Demo User".to_string(),
            email: "demo@eduverse.app".to_string(),
            profile_image: String::new(),
            wallet_address: "0x7a90000000000000000000000000000000f42e00".to_string(),
        }
    }

    #[test]
    fn starts_unauthenticated() {
        let store = AuthStore::default();
        assert_eq!(store.phase(), AuthPhase::Unauthenticated);
        assert!(!store.loading);
        assert!(store.user.is_none());
    }

    #[test]
    fn login_transitions_through_authenticating() {
        let mut store = AuthStore::default();
        store.begin_login();
        assert_eq!(store.phase(), AuthPhase::Authenticating);
        assert!(store.loading);

        store.complete_login(Ok(demo_user()));
        assert_eq!(store.phase(), AuthPhase::Authenticated);
        assert!(!store.loading);
        assert_eq!(store.user.as_ref().unwrap().name, "Demo User");
    }

    #[test]
    fn login_then_logout_returns_to_initial_state() {
        let mut store = AuthStore::default();
        store.begin_login();
        store.complete_login(Ok(demo_user()));
        store.logout();
        assert_eq!(store, AuthStore::default());
    }

    #[test]
    fn complete_login_always_clears_loading() {
        let mut store = AuthStore::default();
        store.begin_login();
        store.complete_login(Err(AuthError::ProviderUnavailable));
        assert!(!store.loading);

        store.begin_login();
        store.complete_login(Ok(demo_user()));
        assert!(!store.loading);
    }

    #[test]
    fn failed_login_leaves_session_absent_with_error() {
        let mut store = AuthStore::default();
        store.begin_login();
        store.complete_login(Err(AuthError::LoginFailed {
            reason: "rejected".to_string(),
        }));
        assert_eq!(store.phase(), AuthPhase::Unauthenticated);
        assert!(store.user.is_none());
        assert!(store.error.is_some());
    }

    #[test]
    fn begin_login_clears_previous_error() {
        let mut store = AuthStore::default();
        store.begin_login();
        store.complete_login(Err(AuthError::ProviderUnavailable));
        store.begin_login();
        assert!(store.error.is_none());
    }

    #[test]
    fn overlapping_logins_last_completion_wins() {
        let mut store = AuthStore::default();
        store.begin_login();
        store.begin_login();
        store.complete_login(Err(AuthError::ProviderUnavailable));
        store.complete_login(Ok(demo_user()));
        assert_eq!(store.phase(), AuthPhase::Authenticated);
        assert!(store.error.is_none());
    }

    #[test]
    fn logout_is_idempotent() {
        let mut store = AuthStore::default();
        store.logout();
        store.logout();
        assert_eq!(store, AuthStore::default());
    }
}
