//! Error handling for the Bunny Stream client
//!
//! This module defines the error type returned by every fallible operation.

pub mod formatting;
pub mod types;

pub use formatting::{format_error, format_error_for_logging};
pub use types::{ApiError, Error, MAX_ERROR_MESSAGE_BYTES, Result};
