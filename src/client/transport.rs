//! HTTP transport abstraction
//!
//! The client talks to the API through [`Transport`] so tests and callers can
//! substitute their own implementation. [`ReqwestTransport`] is the default.

use crate::{Result, config::Settings, types::Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Body, Client, Method};
use url::Url;

/// A fully built request, ready to dispatch
#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Body>,
}

impl ApiRequest {
    /// Create a request with no headers and no body
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Add a header, replacing any previous value
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach a request body
    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Trait for dispatching API requests to enable testing with mocks
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the buffered response.
    ///
    /// Non-success statuses are returned as responses, not errors.
    async fn execute(&self, request: ApiRequest) -> Result<Response>;
}

/// Transport backed by a [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client with the configured timeout and user agent
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.network.timeout)
            .user_agent(settings.network.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    /// Use a caller-built client as is
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Response> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status_code = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(Response::new(status_code, headers, body.to_vec()))
    }
}
