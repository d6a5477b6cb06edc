//! Playback and signed URL generation
//!
//! [`UrlGenerator`] needs no network access. It is built from [`Settings`] and
//! formats URLs for the embed player, the direct play page and the CDN pull
//! zone, optionally with signed tokens.

pub mod playback;
pub mod signed;
pub mod signer;

pub use playback::VideoUrls;
pub use signer::{SignedUrlOptions, sign_cdn_token, sign_embed_token};

use crate::{Error, Result, config::Settings};

/// Host of the iframe embed player
pub const EMBED_HOST: &str = "iframe.mediadelivery.net";

/// Host of the direct play page
pub const DIRECT_PLAY_HOST: &str = "video.bunnycdn.com";

/// Formats playback URLs for a single video library
#[derive(Clone)]
pub struct UrlGenerator {
    library_id: String,
    cdn_host: Option<String>,
    cdn_token_key: Option<String>,
    embed_token_key: Option<String>,
}

impl std::fmt::Debug for UrlGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlGenerator")
            .field("library_id", &self.library_id)
            .field("cdn_host", &self.cdn_host)
            .field("cdn_token_key", &self.cdn_token_key.as_ref().map(|_| "[redacted]"))
            .field("embed_token_key", &self.embed_token_key.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

impl UrlGenerator {
    /// Create a generator from client settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            library_id: settings.api.library_id.clone(),
            cdn_host: settings.cdn_host().map(str::to_string),
            cdn_token_key: non_blank(&settings.cdn.token_key),
            embed_token_key: non_blank(&settings.embed.token_key),
        }
    }

    /// Video library ID used in embed and direct play URLs
    pub fn library_id(&self) -> &str {
        &self.library_id
    }

    /// Pull zone hostname, if configured
    pub fn cdn_host(&self) -> Option<&str> {
        self.cdn_host.as_deref()
    }

    fn cdn_host_required(&self) -> Result<&str> {
        self.cdn_host.as_deref().ok_or(Error::CdnHostnameRequired)
    }

    fn cdn_token_key_required(&self) -> Result<&str> {
        self.cdn_token_key.as_deref().ok_or(Error::CdnTokenKeyRequired)
    }

    fn embed_token_key_required(&self) -> Result<&str> {
        self.embed_token_key
            .as_deref()
            .ok_or(Error::EmbedTokenKeyRequired)
    }
}

impl From<&Settings> for UrlGenerator {
    fn from(settings: &Settings) -> Self {
        Self::new(settings)
    }
}

pub(crate) fn require_video_id(video_id: &str) -> Result<()> {
    if video_id.trim().is_empty() {
        return Err(Error::VideoIdRequired);
    }
    Ok(())
}

pub(crate) fn require_resolution(resolution: &str) -> Result<()> {
    if resolution.trim().is_empty() {
        return Err(Error::ResolutionRequired);
    }
    Ok(())
}
