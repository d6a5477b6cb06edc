//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use bunnystream::{ApiRequest, Response, Result, Settings, StreamClient, Transport};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";
pub const LIBRARY_ID: &str = "123";
pub const CDN_HOSTNAME: &str = "vz-abc123.b-cdn.net";

/// Test configuration factory
pub struct TestConfig;

impl TestConfig {
    /// Credentials only
    pub fn minimal() -> Settings {
        Settings::with_credentials(API_KEY, LIBRARY_ID)
    }

    /// Credentials pointed at a mock server
    pub fn with_base_url(base_url: &str) -> Settings {
        Self::minimal().with_base_url(base_url)
    }

    /// Credentials plus a CDN hostname and both signing keys
    pub fn signed() -> Settings {
        Self::minimal()
            .with_cdn_hostname(CDN_HOSTNAME)
            .with_embed_token_key("embed-secret")
            .with_cdn_token_key("cdn-secret")
    }
}

/// Test data factory
pub struct MockData;

impl MockData {
    /// Body returned by the create endpoint
    pub fn video_object(guid: &str, title: &str) -> serde_json::Value {
        serde_json::json!({
            "videoLibraryId": 123,
            "guid": guid,
            "title": title,
            "status": 0,
            "length": 0
        })
    }

    /// Body returned by the upload endpoint
    pub fn upload_success() -> serde_json::Value {
        serde_json::json!({
            "success": true,
            "message": "OK",
            "statusCode": 200
        })
    }
}

/// Mock server factory
pub struct MockServerFactory;

impl MockServerFactory {
    /// Create new mock server
    pub async fn new() -> MockServer {
        MockServer::start().await
    }

    /// Client talking to the given mock server
    pub fn client(server: &MockServer) -> StreamClient {
        StreamClient::new(TestConfig::with_base_url(&server.uri())).unwrap()
    }

    /// Answer every create call with a fixed status and body
    pub async fn setup_create_response(server: &MockServer, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/library/{}/videos", LIBRARY_ID)))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(server)
            .await;
    }
}

/// Transport that records requests instead of sending them
#[derive(Debug, Clone)]
pub struct MockTransport {
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    status_code: u16,
    body: Vec<u8>,
}

/// What a [`MockTransport`] saw
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl MockTransport {
    /// Answer every request with `status_code` and `body`
    pub fn responding(status_code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            status_code,
            body: body.into(),
        }
    }

    pub fn ok() -> Self {
        Self::responding(200, "{}")
    }

    /// Handle that keeps observing after the transport moves into a client
    pub fn handle(&self) -> Self {
        self.clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let headers = request
            .headers
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    v.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method.to_string(),
            url: request.url.to_string(),
            headers,
        });

        Ok(Response::new(
            self.status_code,
            Default::default(),
            self.body.clone(),
        ))
    }
}

/// Test utilities
pub struct TestUtils;

impl TestUtils {
    /// Initialize test logging
    pub fn init_logger() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init();
    }
}
