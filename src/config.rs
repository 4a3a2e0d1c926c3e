use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub login_delay_ms: u32,
    pub donate_delay_ms: u32,
    pub answer_delay_ms: u32,
    pub toast_duration_ms: u32,
    pub confetti_duration_ms: u32,
    pub demo_name: String,
    pub demo_email: String,
    pub xp_config: XpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1500,
            donate_delay_ms: 2000,
            answer_delay_ms: 2000,
            toast_duration_ms: 4000,
            confetti_duration_ms: 5000,
            demo_name: "Demo User".to_string(),
            demo_email: "web3auth@gmail.com".to_string(),
            xp_config: XpConfig::default(),
        }
    }
}

/// XP awarded per user action. Display-only, nothing accumulates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpConfig {
    pub donate: u32,
    pub claim: u32,
    pub save_opportunity: u32,
    pub vote: u32,
    pub ask_question: u32,
}

impl Default for XpConfig {
    fn default() -> Self {
        Self {
            donate: 50,
            claim: 25,
            save_opportunity: 15,
            vote: 10,
            ask_question: 5,
        }
    }
}

// Global static configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::default();
}
