//! Unsigned playback URLs

use super::{DIRECT_PLAY_HOST, EMBED_HOST, UrlGenerator, require_resolution, require_video_id};
use crate::Result;
use serde::Serialize;

/// Every unsigned URL for one video
///
/// CDN-backed URLs are `None` when no pull zone hostname is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoUrls {
    pub embed: String,
    pub direct_play: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_playlist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_animation: Option<String>,
}

impl UrlGenerator {
    /// Base URL of a video on the pull zone: `https://{host}/{video_id}`
    fn cdn_base(&self, video_id: &str) -> Result<String> {
        let host = self.cdn_host_required()?;
        Ok(format!("https://{}/{}", host, video_id))
    }

    /// Iframe player URL
    ///
    /// `https://iframe.mediadelivery.net/embed/{library_id}/{video_id}`
    pub fn embed_url(&self, video_id: &str) -> Result<String> {
        require_video_id(video_id)?;
        Ok(format!(
            "https://{}/embed/{}/{}",
            EMBED_HOST, self.library_id, video_id
        ))
    }

    /// Standalone watch page
    ///
    /// `https://video.bunnycdn.com/play/{library_id}/{video_id}`
    pub fn direct_play_url(&self, video_id: &str) -> Result<String> {
        require_video_id(video_id)?;
        Ok(format!(
            "https://{}/play/{}/{}",
            DIRECT_PLAY_HOST, self.library_id, video_id
        ))
    }

    /// HLS manifest for custom players
    pub fn hls_playlist_url(&self, video_id: &str) -> Result<String> {
        require_video_id(video_id)?;
        Ok(format!("{}/playlist.m3u8", self.cdn_base(video_id)?))
    }

    pub fn thumbnail_url(&self, video_id: &str) -> Result<String> {
        require_video_id(video_id)?;
        Ok(format!("{}/thumbnail.jpg", self.cdn_base(video_id)?))
    }

    /// Animated WebP used for hover previews
    pub fn preview_animation_url(&self, video_id: &str) -> Result<String> {
        require_video_id(video_id)?;
        Ok(format!("{}/preview.webp", self.cdn_base(video_id)?))
    }

    /// Direct MP4 file at one resolution. Requires MP4 fallback on the library.
    ///
    /// `https://{host}/{video_id}/play_{resolution}.mp4`
    pub fn mp4_url(&self, video_id: &str, resolution: impl AsRef<str>) -> Result<String> {
        let resolution = resolution.as_ref();
        require_video_id(video_id)?;
        require_resolution(resolution)?;
        Ok(format!(
            "{}/play_{}.mp4",
            self.cdn_base(video_id)?,
            resolution
        ))
    }

    /// Collect all unsigned URLs for a video
    pub fn video_urls(&self, video_id: &str) -> Result<VideoUrls> {
        require_video_id(video_id)?;
        Ok(VideoUrls {
            embed: self.embed_url(video_id)?,
            direct_play: self.direct_play_url(video_id)?,
            hls_playlist: self.hls_playlist_url(video_id).ok(),
            thumbnail: self.thumbnail_url(video_id).ok(),
            preview_animation: self.preview_animation_url(video_id).ok(),
        })
    }
}
