//! Configuration management
//!
//! Built-in defaults, overridden by an optional `config/auth.toml`, overridden
//! in turn by `AUTH_CORE_*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
pub const DEFAULT_TOKEN_KEY: &str = "auth_token";
pub const DEFAULT_USER_KEY: &str = "user_data";

const CONFIG_PATH: &str = "config/auth";
const ENV_PREFIX: &str = "AUTH_CORE";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Simulated network latency before login/sign-up resolves
    /// Environment: AUTH_CORE_LOGIN_DELAY_MS
    pub login_delay_ms: u64,

    /// Secure store key holding the auth token
    pub token_key: String,

    /// Secure store key holding the sanitized user JSON
    pub user_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            user_key: DEFAULT_USER_KEY.to_string(),
        }
    }
}

impl AuthConfig {
    /// Load from `config/auth.toml` (optional) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("login_delay_ms", DEFAULT_LOGIN_DELAY_MS as i64)?
            .set_default("token_key", DEFAULT_TOKEN_KEY)?
            .set_default("user_key", DEFAULT_USER_KEY)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: AuthConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.token_key.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "token_key cannot be empty".into(),
            ));
        }

        if self.user_key.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "user_key cannot be empty".into(),
            ));
        }

        if self.token_key == self.user_key {
            return Err(config::ConfigError::Message(
                "token_key and user_key must differ".into(),
            ));
        }

        Ok(())
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }
}
