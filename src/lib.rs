//! Bunny Stream client
//!
//! An async client for the Bunny Stream video API together with generators
//! for playback URLs and signed, expiring URLs.
//!
//! # Features
//!
//! - **Video API**: create video objects and upload video binaries
//! - **Playback URLs**: embed player, direct play page, HLS manifest, thumbnails,
//!   animated previews and MP4 fallbacks
//! - **Signed URLs**: embed view tokens and CDN Token Authentication V2 with
//!   optional IP and country restrictions
//! - **Configuration**: code, TOML file or `BUNNY_*` environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use bunnystream::{CreateVideoOptions, Settings, StreamClient, UploadVideoOptions};
//!
//! # async fn example() -> bunnystream::Result<()> {
//! let settings = Settings::with_credentials("api-key", "12345")
//!     .with_cdn_hostname("vz-abc123.b-cdn.net");
//! let client = StreamClient::new(settings)?;
//!
//! let created = client
//!     .create_video("My Video", &CreateVideoOptions::new())
//!     .await?;
//! let guid = created.json::<serde_json::Value>()?["guid"]
//!     .as_str()
//!     .unwrap_or_default()
//!     .to_string();
//!
//! client
//!     .upload_video_file(&guid, "video.mp4", &UploadVideoOptions::new())
//!     .await?;
//!
//! let _playlist = client.urls().hls_playlist_url(&guid)?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod urls;
pub mod utils;

pub use client::{
    ApiRequest, QueryBuilder, ReqwestTransport, StreamClient, StreamClientGeneric, Transport,
};
pub use config::{ConfigLoader, Settings};
pub use error::{ApiError, Error, Result};
pub use types::{CreateVideoOptions, OutputCodec, Resolution, Response, UploadVideoOptions};
pub use urls::{SignedUrlOptions, UrlGenerator, VideoUrls};
