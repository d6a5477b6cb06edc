//! Configuration management for the client
//!
//! This module handles loading, defaulting and validating the settings a
//! client is built from.

pub mod loader;
pub mod settings;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader};
pub use settings::{
    ApiSettings, CdnSettings, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT,
    EmbedSettings, NetworkSettings, Settings,
};

// Environment variables are process-wide; config tests take this lock.
#[cfg(test)]
pub(crate) static ENV_TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
