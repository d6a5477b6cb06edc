//! Basic usage example for the Bunny Stream client
//!
//! Loads settings from `BUNNY_*` environment variables (or the file named by
//! `BUNNYSTREAM_CONFIG`), prints playback and signed URLs for a video, and
//! uploads a file when one is given.
//!
//! ```bash
//! BUNNY_API_KEY=... BUNNY_LIBRARY_ID=... BUNNY_CDN_HOSTNAME=vz-abc.b-cdn.net \
//!     cargo run --example basic_usage -- "My Video" ./video.mp4
//! ```

use bunnystream::{
    ConfigLoader, CreateVideoOptions, Resolution, SignedUrlOptions, StreamClient,
    UploadVideoOptions,
};
use anyhow::Context;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bunnystream=debug".into()),
        )
        .init();

    let settings = ConfigLoader::new()
        .load(ConfigLoader::get_config_path().as_deref())
        .context("failed to load bunnystream settings")?;
    let client = StreamClient::new(settings)?;

    let mut args = std::env::args().skip(1);
    let title = args.next().unwrap_or_else(|| "Example video".to_string());
    let file = args.next();

    let created = client
        .create_video(&title, &CreateVideoOptions::new())
        .await?;
    let video: serde_json::Value = created.json()?;
    let guid = video["guid"]
        .as_str()
        .context("create response has no guid")?
        .to_string();
    println!("Created video {} ({})", guid, created.status_code);

    if let Some(path) = file {
        let options = UploadVideoOptions::new()
            .with_enabled_resolutions([Resolution::P720, Resolution::P1080])
            .with_generate_chapters(true);
        let uploaded = client
            .upload_video_file(&guid, &path, &options)
            .await
            .with_context(|| format!("failed to upload {}", path))?;
        println!("Uploaded {} ({})", path, uploaded.status_code);
    }

    let urls = client.urls().video_urls(&guid)?;
    println!("Embed:       {}", urls.embed);
    println!("Direct play: {}", urls.direct_play);
    if let Some(hls) = &urls.hls_playlist {
        println!("HLS:         {}", hls);
    }

    match client
        .urls()
        .signed_hls_url(&guid, Duration::from_secs(3600), &SignedUrlOptions::new())
    {
        Ok(signed) => println!("Signed HLS:  {}", signed),
        Err(e) => println!("Signed HLS unavailable: {}", e),
    }

    Ok(())
}
