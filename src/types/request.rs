//! Request type definitions
//!
//! Options for the video endpoints and the JSON body of a create call.

use crate::types::{OutputCodec, Resolution};
use serde::Serialize;

/// JSON body for `POST /library/{libraryId}/videos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateVideoRequest {
    /// Display title
    pub title: String,

    /// Collection the video is filed under
    #[serde(rename = "collectionId", skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,

    /// Position the thumbnail is captured from
    #[serde(rename = "thumbnailTime", skip_serializing_if = "Option::is_none")]
    pub thumbnail_time: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

impl CreateVideoRequest {
    /// Build the request body; blank optional fields are left out
    pub fn new(title: impl Into<String>, options: &CreateVideoOptions) -> Self {
        Self {
            title: title.into(),
            collection_id: non_blank(&options.collection_id),
            thumbnail_time: non_blank(&options.thumbnail_time),
        }
    }
}

/// Optional fields for creating a video object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateVideoOptions {
    /// Collection ID
    pub collection_id: Option<String>,
    /// Thumbnail capture time
    pub thumbnail_time: Option<String>,
}

impl CreateVideoOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the video in a collection
    pub fn with_collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    /// Set the thumbnail capture time
    pub fn with_thumbnail_time(mut self, thumbnail_time: impl Into<String>) -> Self {
        self.thumbnail_time = Some(thumbnail_time.into());
        self
    }
}

/// Query options for `PUT /library/{libraryId}/videos/{videoId}`
///
/// List-valued options accumulate across calls; scalar options keep the last
/// value set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadVideoOptions {
    /// Just-in-time encoding
    pub jit_enabled: Option<bool>,
    /// Resolutions to encode
    pub enabled_resolutions: Vec<Resolution>,
    /// Codecs to encode
    pub enabled_output_codecs: Vec<OutputCodec>,
    /// Automatic transcription
    pub transcribe_enabled: Option<bool>,
    /// Languages to transcribe into
    pub transcribe_languages: Vec<String>,
    /// Spoken language of the source
    pub source_language: Option<String>,
    pub generate_title: Option<bool>,
    pub generate_description: Option<bool>,
    pub generate_chapters: Option<bool>,
    pub generate_moments: Option<bool>,
}

impl UploadVideoOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jit_enabled(mut self, enabled: bool) -> Self {
        self.jit_enabled = Some(enabled);
        self
    }

    /// Add resolutions to encode
    pub fn with_enabled_resolutions(
        mut self,
        resolutions: impl IntoIterator<Item = Resolution>,
    ) -> Self {
        self.enabled_resolutions.extend(resolutions);
        self
    }

    /// Add output codecs
    pub fn with_enabled_output_codecs(
        mut self,
        codecs: impl IntoIterator<Item = OutputCodec>,
    ) -> Self {
        self.enabled_output_codecs.extend(codecs);
        self
    }

    pub fn with_transcribe_enabled(mut self, enabled: bool) -> Self {
        self.transcribe_enabled = Some(enabled);
        self
    }

    /// Add transcription languages
    pub fn with_transcribe_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transcribe_languages
            .extend(languages.into_iter().map(Into::into));
        self
    }

    pub fn with_source_language(mut self, language: impl Into<String>) -> Self {
        self.source_language = Some(language.into());
        self
    }

    pub fn with_generate_title(mut self, enabled: bool) -> Self {
        self.generate_title = Some(enabled);
        self
    }

    pub fn with_generate_description(mut self, enabled: bool) -> Self {
        self.generate_description = Some(enabled);
        self
    }

    pub fn with_generate_chapters(mut self, enabled: bool) -> Self {
        self.generate_chapters = Some(enabled);
        self
    }

    pub fn with_generate_moments(mut self, enabled: bool) -> Self {
        self.generate_moments = Some(enabled);
        self
    }
}
