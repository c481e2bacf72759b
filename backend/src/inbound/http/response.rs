//! Standard success envelope for REST responses.
//!
//! Every successful endpoint wraps its payload as
//! `{"success": true, "message": …, "data": …, "statusCode": …}` so clients
//! can treat all results uniformly.

use serde::Serialize;

/// Success envelope wrapping a response payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Always `true`; failures use the error envelope instead.
    pub success: bool,
    /// Human-readable status phrase.
    pub message: String,
    /// Endpoint payload.
    pub data: T,
    /// HTTP status code mirrored into the body.
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload for a 200 response.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            status_code: 200,
        }
    }

    /// Wrap a payload for a 201 response.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            status_code: 201,
        }
    }
}
