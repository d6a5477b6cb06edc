//! Error formatting utilities
//!
//! Flattens an [`Error`] and its cause chain into text or a structured value
//! suitable for tracing fields.

use crate::Error;
use std::error::Error as StdError;

/// Format error for display, appending nested causes
pub fn format_error(error: &Error) -> String {
    let mut result = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !result.contains(&cause_text) {
            result = format!("{} (caused by {})", result, cause_text);
        }
        source = cause.source();
    }

    result
}

/// Format error for logging with structured data
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    let mut log_data = serde_json::json!({
        "message": format_error(error),
        "category": error.category(),
        "retryable": error.is_retryable(),
    });

    if let Some(status) = error.status_code() {
        log_data["status_code"] = serde_json::Value::Number(status.into());
    }

    if let Error::Api(api) = error {
        log_data["body_len"] = serde_json::Value::Number(api.body.len().into());
    }

    log_data
}
