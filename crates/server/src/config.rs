use std::time::Duration;

use anyhow::Context;
use tracing::warn;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o";
const DEFAULT_COMPLETION_MAX_TOKENS: u32 = 1024;
const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 60;
const DEFAULT_FORGE_BASE_URL: &str = "http://localhost:8420";
const DEFAULT_FORGE_POLL_INTERVAL_SECS: u64 = 2;
const DEFAULT_FORGE_MAX_WAIT_SECS: u64 = 90;

/// Completion-service settings.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

/// Forge (artifact build service) settings.
#[derive(Debug, Clone)]
pub struct ForgeConfig {
    pub base_url: String,
    pub poll_interval: Duration,
    pub max_wait: Duration,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub completion: CompletionConfig,
    pub forge: ForgeConfig,
}

impl ServerConfig {
    /// Read configuration from the environment. Only the completion API
    /// key is required; everything else has a default, and malformed
    /// numeric values fall back with a warning.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY must be set")?;

        Ok(Self {
            bind_addr: env_or("BOARDROOM_BIND", DEFAULT_BIND_ADDR),
            completion: CompletionConfig {
                base_url: env_or("OPENAI_BASE_URL", DEFAULT_COMPLETION_BASE_URL),
                api_key,
                model: env_or("COMPLETION_MODEL", DEFAULT_COMPLETION_MODEL),
                max_tokens: env_u64_or(
                    "COMPLETION_MAX_TOKENS",
                    u64::from(DEFAULT_COMPLETION_MAX_TOKENS),
                ) as u32,
                timeout: Duration::from_secs(env_u64_or(
                    "COMPLETION_TIMEOUT_SECS",
                    DEFAULT_COMPLETION_TIMEOUT_SECS,
                )),
            },
            forge: ForgeConfig {
                base_url: env_or("AUTOFORGE_API_URL", DEFAULT_FORGE_BASE_URL),
                poll_interval: Duration::from_secs(env_u64_or(
                    "FORGE_POLL_INTERVAL_SECS",
                    DEFAULT_FORGE_POLL_INTERVAL_SECS,
                )),
                max_wait: Duration::from_secs(env_u64_or(
                    "FORGE_MAX_WAIT_SECS",
                    DEFAULT_FORGE_MAX_WAIT_SECS,
                )),
            },
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_u64_or(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            warn!(
                var = name,
                value = %value,
                "Malformed numeric environment variable, using default"
            );
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global; serialize the tests that
    // touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_from_env_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var("OPENAI_API_KEY", "sk-test");
        std::env::remove_var("BOARDROOM_BIND");
        std::env::remove_var("COMPLETION_TIMEOUT_SECS");

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.completion.model, DEFAULT_COMPLETION_MODEL);
        assert_eq!(config.completion.timeout, Duration::from_secs(60));
        assert_eq!(config.forge.poll_interval, Duration::from_secs(2));

        std::env::remove_var("OPENAI_API_KEY");
    }

    #[test]
    fn test_from_env_requires_api_key() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var("OPENAI_API_KEY");

        assert!(ServerConfig::from_env().is_err());
    }

    #[test]
    fn test_malformed_numbers_fall_back() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var("OPENAI_API_KEY", "sk-test");
        std::env::set_var("COMPLETION_TIMEOUT_SECS", "not-a-number");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.completion.timeout, Duration::from_secs(60));

        std::env::remove_var("COMPLETION_TIMEOUT_SECS");
        std::env::remove_var("OPENAI_API_KEY");
    }
}
