//! Video endpoints

use super::{QueryBuilder, StreamClientGeneric, Transport};
use crate::{
    Error, Result,
    types::{CreateVideoOptions, CreateVideoRequest, Response, UploadVideoOptions},
};
use reqwest::{Body, Method};
use std::path::Path;
use tracing::{debug, info};

impl<T: Transport> StreamClientGeneric<T> {
    /// Create a video object in the library.
    ///
    /// `POST /library/{libraryId}/videos` with a JSON body. The response body
    /// holds the new video's metadata, including its `guid`.
    pub async fn create_video(
        &self,
        title: &str,
        options: &CreateVideoOptions,
    ) -> Result<Response> {
        if title.trim().is_empty() {
            return Err(Error::TitleRequired);
        }

        let url = self.endpoint(&format!("/library/{}/videos", self.settings.api.library_id))?;
        let body = serde_json::to_vec(&CreateVideoRequest::new(title, options))?;

        let request = self
            .request(Method::POST, url, Some("application/json"))
            .with_body(body);

        let response = self.dispatch(request).await?;
        info!(status = response.status_code, "Created video object");
        Ok(response)
    }

    /// Upload the binary for an existing video object.
    ///
    /// `PUT /library/{libraryId}/videos/{videoId}` with an
    /// `application/octet-stream` body. Encoding options go in the query string.
    /// Any [`Body`] source works, including streams.
    pub async fn upload_video(
        &self,
        video_id: &str,
        body: impl Into<Body>,
        options: &UploadVideoOptions,
    ) -> Result<Response> {
        if video_id.trim().is_empty() {
            return Err(Error::VideoIdRequired);
        }

        let url = self.endpoint(&format!(
            "/library/{}/videos/{}",
            self.settings.api.library_id, video_id
        ))?;

        let mut request = self
            .request(Method::PUT, url, Some("application/octet-stream"))
            .with_body(body);

        QueryBuilder::from_request(&request)
            .set_bool("jitEnabled", options.jit_enabled)
            .set_strings("enabledResolutions", &options.enabled_resolutions)
            .set_strings("enabledOutputCodecs", &options.enabled_output_codecs)
            .set_bool("transcribeEnabled", options.transcribe_enabled)
            .set_strings("transcribeLanguages", &options.transcribe_languages)
            .set_string(
                "sourceLanguage",
                options.source_language.as_deref().unwrap_or_default(),
            )
            .set_bool("generateTitle", options.generate_title)
            .set_bool("generateDescription", options.generate_description)
            .set_bool("generateChapters", options.generate_chapters)
            .set_bool("generateMoments", options.generate_moments)
            .commit(&mut request);

        debug!(video_id, query = request.url.query().unwrap_or(""), "Uploading video");

        let response = self.dispatch(request).await?;
        info!(video_id, status = response.status_code, "Uploaded video");
        Ok(response)
    }

    /// Upload a local file, streaming it from disk
    pub async fn upload_video_file(
        &self,
        video_id: &str,
        path: impl AsRef<Path>,
        options: &UploadVideoOptions,
    ) -> Result<Response> {
        if video_id.trim().is_empty() {
            return Err(Error::VideoIdRequired);
        }

        let file = tokio::fs::File::open(path.as_ref()).await?;
        debug!(video_id, path = %path.as_ref().display(), "Opened video file");
        self.upload_video(video_id, file, options).await
    }
}
