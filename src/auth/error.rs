use thiserror::Error;

/// Errors the auth provider can surface to the UI.
///
/// The demo provider never actually produces these (it fabricates a session
/// after a fixed delay), but the store and the views handle every variant so
/// a real provider can slot in without touching them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The auth provider could not be initialized at startup.
    #[error("auth provider initialization failed: {reason}")]
    InitializationFailed {
        /// Description of what went wrong during init.
        reason: String,
    },

    /// A login attempt was rejected or aborted.
    #[error("login failed: {reason}")]
    LoginFailed {
        /// Provider-supplied failure message.
        reason: String,
    },

    /// Login was requested before the provider was ready.
    #[error("auth provider not available")]
    ProviderUnavailable,
}
