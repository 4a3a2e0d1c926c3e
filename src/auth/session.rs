use serde::{Deserialize, Serialize};

// ============================================================================
// SESSION MODEL
// ============================================================================

/// The authenticated identity held for the duration of a login.
///
/// Owned exclusively by the session store; views only read it through the
/// auth context while rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    /// Avatar URL. Empty for the demo identity; the navbar falls back to
    /// the name's first letter.
    pub profile_image: String,
    /// `0x` + 40 hex chars. Cosmetic only, no key material behind it.
    pub wallet_address: String,
}

impl UserInfo {
    /// First letter of the name, for the avatar fallback.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('U')
    }
}

/// Formats 20 entropy bytes as a wallet-address-shaped string.
pub fn wallet_address_from_entropy(entropy: &[u8; 20]) -> String {
    let mut addr = String::with_capacity(42);
    addr.push_str("0x");
    for byte in entropy {
        addr.push_str(&format!("{:02x}", byte));
    }
    addr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_address_has_expected_shape() {
        let addr = wallet_address_from_entropy(&[0xab; 20]);
        assert_eq!(addr.len(), 42);
        assert!(addr.starts_with("0x"));
        assert!(addr[2..].chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(&addr[2..4], "ab");
    }

    #[test]
    fn wallet_address_zero_entropy_is_padded() {
        let addr = wallet_address_from_entropy(&[0u8; 20]);
        assert_eq!(addr, format!("0x{}", "0".repeat(40)));
    }

    #[test]
    fn initial_falls_back_for_empty_name() {
        let user = UserInfo {
            name: String::new(),
            email: String::new(),
            profile_image: String::new(),
            wallet_address: String::new(),
        };
        assert_eq!(user.initial(), 'U');
    }
}
