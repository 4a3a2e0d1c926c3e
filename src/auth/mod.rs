pub mod error;
pub mod provider;
pub mod session;
pub mod store;

pub use error::AuthError;
pub use provider::{DemoAuthProvider, GlooDelay};
pub use session::UserInfo;
pub use store::{AuthPhase, AuthStore};
