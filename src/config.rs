use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;
pub const DEFAULT_HERO_SEED: u64 = 42;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Runtime settings resolved from the environment (after `.env` loading).
#[derive(Debug, Clone)]
pub struct Settings {
    pub public_base_url: String,
    pub submit_delay: Duration,
    pub hero_seed: u64,
    pub users_file: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            public_base_url: get_public_base_url(),
            submit_delay: get_submit_delay()?,
            hero_seed: get_hero_seed()?,
            users_file: get_users_file(),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            hero_seed: DEFAULT_HERO_SEED,
            users_file: None,
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_public_base_url() -> String {
    sanitize_base_url(&env::var("PUBLIC_BASE_URL").unwrap_or_default())
}

pub fn get_submit_delay() -> Result<Duration, ConfigError> {
    let millis = parse_u64_var("SUBMIT_DELAY_MS", DEFAULT_SUBMIT_DELAY_MS)?;
    Ok(Duration::from_millis(millis))
}

pub fn get_hero_seed() -> Result<u64, ConfigError> {
    parse_u64_var("HERO_SEED", DEFAULT_HERO_SEED)
}

pub fn get_users_file() -> Option<PathBuf> {
    env::var("USERS_FILE")
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
}

fn parse_u64_var(name: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
        _ => Ok(default),
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_PUBLIC_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
