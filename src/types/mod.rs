//! Type definitions for the video API
//!
//! This module contains the request options, the response envelope and the
//! encoding tokens shared by the client and the URL generator.

pub mod media;
pub mod request;
pub mod response;

pub use media::{OutputCodec, Resolution};
pub use request::{CreateVideoOptions, CreateVideoRequest, UploadVideoOptions};
pub use response::Response;
