// ============================================================================
// DEMO AUTH PROVIDER
// ============================================================================
// Stands in for a real wallet/OAuth provider. connect() resolves after an
// artificial delay with a fabricated session: fixed demo identity plus a
// randomly generated wallet-address-shaped string. No network, no keys.
// ============================================================================

use gloo_timers::future::TimeoutFuture;

use crate::auth::error::AuthError;
use crate::auth::session::{wallet_address_from_entropy, UserInfo};
use crate::config::CONFIG;

/// Injectable sleep so the provider's delay is mockable in tests.
pub trait Delay {
    fn sleep(&self, ms: u32) -> impl std::future::Future<Output = ()>;
}

/// Browser timer delay used by the running app.
pub struct GlooDelay;

impl Delay for GlooDelay {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

pub struct DemoAuthProvider;

impl DemoAuthProvider {
    /// Simulated login. Cannot fail by design; the Result shape is the
    /// contract a real provider would fill in.
    pub async fn connect(delay: &impl Delay) -> Result<UserInfo, AuthError> {
        delay.sleep(CONFIG.login_delay_ms).await;

        let entropy = random_entropy();
        Ok(UserInfo {
            name: CONFIG.demo_name.clone(),
            email: CONFIG.demo_email.clone(),
            profile_image: String::new(),
            wallet_address: wallet_address_from_entropy(&entropy),
        })
    }
}

/// 20 bytes from Math.random. Cosmetic entropy, not cryptographic.
fn random_entropy() -> [u8; 20] {
    let mut bytes = [0u8; 20];
    for byte in bytes.iter_mut() {
        *byte = (js_sys::Math::random() * 256.0) as u8;
    }
    bytes
}
