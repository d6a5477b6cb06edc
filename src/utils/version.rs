//! Version information utilities

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the current crate version
pub fn get_version() -> &'static str {
    VERSION
}

/// Default `User-Agent` sent with API requests
pub fn user_agent() -> String {
    format!("bunnystream-rs/{}", get_version())
}
