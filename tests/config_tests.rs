use construo::config;
use once_cell::sync::Lazy;
use std::env;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

// Environment variables are process-wide; tests touching them take this lock.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

// A failed assertion elsewhere must not poison the remaining env tests.
fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://construo.example.com/"),
        "https://construo.example.com"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://construo.example.com///"),
        "https://construo.example.com"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://construo.example.com/  "),
        "https://construo.example.com"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), "http://localhost:8080");
    assert_eq!(config::sanitize_base_url("   "), "http://localhost:8080");
}

#[test]
fn test_get_public_base_url_from_env() {
    let _guard = lock_env();
    env::set_var("PUBLIC_BASE_URL", "https://construo.example.com/");

    let result = config::get_public_base_url();

    assert_eq!(result, "https://construo.example.com");
    env::remove_var("PUBLIC_BASE_URL");
}

#[test]
fn test_get_public_base_url_uses_default() {
    let _guard = lock_env();
    env::remove_var("PUBLIC_BASE_URL");

    assert_eq!(config::get_public_base_url(), config::DEFAULT_PUBLIC_BASE_URL);
}

#[test]
fn test_submit_delay_defaults_to_one_second() {
    let _guard = lock_env();
    env::remove_var("SUBMIT_DELAY_MS");

    let delay = config::get_submit_delay().unwrap();

    assert_eq!(delay, Duration::from_millis(1000));
}

#[test]
fn test_submit_delay_reads_env() {
    let _guard = lock_env();
    env::set_var("SUBMIT_DELAY_MS", " 0 ");

    let delay = config::get_submit_delay().unwrap();

    assert_eq!(delay, Duration::ZERO);
    env::remove_var("SUBMIT_DELAY_MS");
}

#[test]
fn test_submit_delay_rejects_garbage() {
    let _guard = lock_env();
    env::set_var("SUBMIT_DELAY_MS", "soon");

    let err = config::get_submit_delay().unwrap_err();

    assert!(err.to_string().contains("SUBMIT_DELAY_MS"));
    assert!(err.to_string().contains("soon"));
    env::remove_var("SUBMIT_DELAY_MS");
}

#[test]
fn test_users_file_blank_is_none() {
    let _guard = lock_env();
    env::set_var("USERS_FILE", "   ");

    assert!(config::get_users_file().is_none());
    env::remove_var("USERS_FILE");
}

#[test]
fn test_load_env_file_from_path() {
    let _guard = lock_env();
    env::remove_var("HERO_SEED");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "HERO_SEED=7").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    config::load_env_file(Some(&path));

    assert_eq!(config::get_hero_seed().unwrap(), 7);
    env::remove_var("HERO_SEED");
}

#[test]
fn test_settings_from_env_defaults() {
    let _guard = lock_env();
    for name in ["PUBLIC_BASE_URL", "SUBMIT_DELAY_MS", "HERO_SEED", "USERS_FILE"] {
        env::remove_var(name);
    }

    let settings = config::Settings::from_env().unwrap();

    assert_eq!(settings.public_base_url, "http://localhost:8080");
    assert_eq!(settings.submit_delay, Duration::from_millis(1000));
    assert_eq!(settings.hero_seed, 42);
    assert!(settings.users_file.is_none());
}
