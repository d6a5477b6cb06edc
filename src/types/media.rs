//! Encoding tokens accepted by the video API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output resolution of an encoded rendition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "240p")]
    P240,
    #[serde(rename = "360p")]
    P360,
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "1440p")]
    P1440,
    #[serde(rename = "2160p")]
    P2160,
}

impl Resolution {
    /// Every supported resolution, lowest first
    pub const ALL: [Resolution; 7] = [
        Resolution::P240,
        Resolution::P360,
        Resolution::P480,
        Resolution::P720,
        Resolution::P1080,
        Resolution::P1440,
        Resolution::P2160,
    ];

    /// Wire token, e.g. `"720p"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::P240 => "240p",
            Resolution::P360 => "360p",
            Resolution::P480 => "480p",
            Resolution::P720 => "720p",
            Resolution::P1080 => "1080p",
            Resolution::P1440 => "1440p",
            Resolution::P2160 => "2160p",
        }
    }
}

impl AsRef<str> for Resolution {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Video codec for encoded outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputCodec {
    #[serde(rename = "x264")]
    X264,
    #[serde(rename = "vp9")]
    Vp9,
}

impl OutputCodec {
    /// Wire token, e.g. `"x264"`
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputCodec::X264 => "x264",
            OutputCodec::Vp9 => "vp9",
        }
    }
}

impl AsRef<str> for OutputCodec {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OutputCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
