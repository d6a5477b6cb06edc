//! Bunny Stream API client
//!
//! [`StreamClientGeneric`] owns validated settings and a [`Transport`]. Every
//! call builds a fresh request, so one client can be shared across tasks.

pub mod query;
pub mod transport;
pub mod videos;

pub use query::QueryBuilder;
pub use transport::{ApiRequest, ReqwestTransport, Transport};

use crate::{
    Error, Result,
    config::Settings,
    error::format_error_for_logging,
    types::Response,
    urls::UrlGenerator,
};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue, USER_AGENT};
use std::sync::Arc;
use tracing::{debug, warn};

/// Header carrying the library API key
pub const ACCESS_KEY_HEADER: &str = "AccessKey";

/// Convenience type alias for the client with the default reqwest transport
pub type StreamClient = StreamClientGeneric<ReqwestTransport>;

/// Client for a single video library
#[derive(Debug)]
pub struct StreamClientGeneric<T: Transport = ReqwestTransport> {
    /// Defaulted and validated settings
    settings: Arc<Settings>,
    /// Request dispatcher
    transport: Arc<T>,
    /// URL builder sharing the same settings
    urls: UrlGenerator,
    access_key: HeaderValue,
    user_agent: HeaderValue,
}

impl<T: Transport> Clone for StreamClientGeneric<T> {
    fn clone(&self) -> Self {
        Self {
            settings: Arc::clone(&self.settings),
            transport: Arc::clone(&self.transport),
            urls: self.urls.clone(),
            access_key: self.access_key.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl StreamClientGeneric<ReqwestTransport> {
    /// Create a client backed by reqwest.
    ///
    /// Settings are defaulted, then validated. The HTTP client uses the
    /// configured timeout and user agent.
    ///
    /// ```rust
    /// use bunnystream::{Settings, StreamClient};
    ///
    /// let settings = Settings::with_credentials("api-key", "12345");
    /// let client = StreamClient::new(settings).unwrap();
    /// assert_eq!(client.settings().api.library_id, "12345");
    /// ```
    pub fn new(settings: Settings) -> Result<Self> {
        let settings = prepare(settings)?;
        let transport = ReqwestTransport::new(&settings)?;
        Self::build(settings, transport)
    }
}

impl<T: Transport> StreamClientGeneric<T> {
    /// Create a client with a custom transport
    pub fn with_transport(settings: Settings, transport: T) -> Result<Self> {
        Self::build(prepare(settings)?, transport)
    }

    fn build(settings: Settings, transport: T) -> Result<Self> {
        let mut access_key = HeaderValue::from_str(&settings.api.api_key)
            .map_err(|_| Error::invalid_config("api_key", "api key is not a valid header value"))?;
        access_key.set_sensitive(true);

        let user_agent = HeaderValue::from_str(&settings.network.user_agent).map_err(|_| {
            Error::invalid_config("user_agent", "user agent is not a valid header value")
        })?;

        Ok(Self {
            urls: UrlGenerator::new(&settings),
            settings: Arc::new(settings),
            transport: Arc::new(transport),
            access_key,
            user_agent,
        })
    }

    /// Effective settings after defaulting
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// URL generator for this library
    pub fn urls(&self) -> &UrlGenerator {
        &self.urls
    }

    /// The transport requests are sent through
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for an API path such as `/library/1/videos`
    pub(crate) fn endpoint(&self, path: &str) -> Result<url::Url> {
        let base = self.settings.api.base_url.trim_end_matches('/');
        Ok(url::Url::parse(&format!("{}{}", base, path))?)
    }

    /// Build an authenticated request with the standard headers
    pub(crate) fn request(
        &self,
        method: Method,
        url: url::Url,
        content_type: Option<&'static str>,
    ) -> ApiRequest {
        let mut request = ApiRequest::new(method, url)
            .with_header(
                HeaderName::from_static("accesskey"),
                self.access_key.clone(),
            )
            .with_header(USER_AGENT, self.user_agent.clone());

        if let Some(content_type) = content_type {
            request = request.with_header(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }

        request
    }

    /// Send a request and map the status code to an error
    pub(crate) async fn dispatch(&self, request: ApiRequest) -> Result<Response> {
        let method = request.method.clone();
        let path = request.url.path().to_string();

        debug!(%method, %path, "Sending Bunny Stream request");

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, %path, error = %format_error_for_logging(&e), "Request failed");
                return Err(e);
            }
        };

        debug!(
            %method,
            %path,
            status = response.status_code,
            body_len = response.body.len(),
            "Received response"
        );

        if let Some(e) = Error::from_status(response.status_code, &response.body) {
            warn!(
                %method,
                %path,
                status = response.status_code,
                error = %format_error_for_logging(&e),
                "Bunny Stream API returned an error"
            );
            return Err(e);
        }

        Ok(response)
    }
}

/// Apply defaults to an owned copy and validate it
fn prepare(mut settings: Settings) -> Result<Settings> {
    settings.apply_defaults();
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingTransport {
        seen: Mutex<Vec<(Method, String)>>,
    }

    #[async_trait::async_trait]
    impl Transport for RecordingTransport {
        async fn execute(&self, request: ApiRequest) -> Result<Response> {
            self.seen
                .lock()
                .unwrap()
                .push((request.method.clone(), request.url.to_string()));
            Ok(Response::new(200, Default::default(), Vec::new()))
        }
    }

    #[test]
    fn test_new_applies_defaults() {
        let mut settings = Settings::with_credentials("test-key", "123");
        settings.api.base_url = String::new();
        settings.network.max_retries = 0;

        let client = StreamClient::new(settings).unwrap();
        assert_eq!(client.settings().api.base_url, crate::config::DEFAULT_BASE_URL);
        assert_eq!(client.settings().network.max_retries, 3);
    }

    #[test]
    fn test_new_rejects_missing_credentials() {
        let err = StreamClient::new(Settings::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { ref field, .. } if field == "api_key"));

        let err = StreamClient::new(Settings::with_credentials("test-key", "")).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { ref field, .. } if field == "library_id"));
    }

    #[test]
    fn test_rejects_api_key_with_newline() {
        let result = StreamClientGeneric::with_transport(
            Settings::with_credentials("bad\nkey", "123"),
            RecordingTransport::default(),
        );
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = StreamClientGeneric::with_transport(
            Settings::with_credentials("test-key", "123").with_base_url("http://localhost:9000/"),
            RecordingTransport::default(),
        )
        .unwrap();

        let url = client.endpoint("/library/123/videos").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/library/123/videos");
    }

    #[test]
    fn test_request_headers() {
        let client = StreamClientGeneric::with_transport(
            Settings::with_credentials("test-key", "123"),
            RecordingTransport::default(),
        )
        .unwrap();

        let url = client.endpoint("/library/123/videos").unwrap();
        let request = client.request(Method::POST, url, Some("application/json"));

        assert_eq!(request.headers.get(ACCESS_KEY_HEADER).unwrap(), "test-key");
        assert!(request.headers.get(ACCESS_KEY_HEADER).unwrap().is_sensitive());
        assert_eq!(
            request.headers.get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(
            request
                .headers
                .get(USER_AGENT)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("bunnystream-rs/")
        );
    }

    #[tokio::test]
    async fn test_dispatch_uses_transport() {
        let client = StreamClientGeneric::with_transport(
            Settings::with_credentials("test-key", "123"),
            RecordingTransport::default(),
        )
        .unwrap();

        let url = client.endpoint("/library/123/videos").unwrap();
        let response = client
            .dispatch(client.request(Method::GET, url, None))
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        let seen = client.transport().seen.lock().unwrap();
        assert_eq!(
            seen.as_slice(),
            &[(
                Method::GET,
                "https://video.bunnycdn.com/library/123/videos".to_string()
            )]
        );
    }

    #[test]
    fn test_urls_share_settings() {
        let client = StreamClient::new(
            Settings::with_credentials("test-key", "123").with_cdn_hostname("vz-abc.b-cdn.net"),
        )
        .unwrap();

        assert_eq!(
            client.urls().hls_playlist_url("video-abc").unwrap(),
            "https://vz-abc.b-cdn.net/video-abc/playlist.m3u8"
        );
    }
}
