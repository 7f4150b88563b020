//! Errors that can occur when using this SDK

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Message shown to the user when nothing more specific can be extracted from a failure.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Errors from performing network requests.
#[allow(missing_docs)]
#[derive(Debug, Error)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum ApiError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    #[error("Request failed with status code {}", .status.as_u16())]
    ResponseContent { status: StatusCode, message: String },
}

/// Error body returned by the Pushify API. Either field may be missing.
#[derive(Deserialize, Debug, Default)]
struct ErrorResponseModel {
    error: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Build an [ApiError] from a non-successful response, consuming its body.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        match response.text().await {
            Ok(message) => Self::ResponseContent { status, message },
            Err(e) => Self::Reqwest(e),
        }
    }

    /// The message to present to the user for this error.
    ///
    /// Prefers the `error` field of a JSON error body, then its `message` field, then the
    /// description of the error itself, falling back to [UNKNOWN_ERROR_MESSAGE].
    pub fn user_message(&self) -> String {
        if let Self::ResponseContent { message, .. } = self {
            let body = serde_json::from_str::<ErrorResponseModel>(message).unwrap_or_default();
            if let Some(error) = body.error.filter(|e| !e.trim().is_empty()) {
                return error;
            }
            if let Some(message) = body.message.filter(|m| !m.trim().is_empty()) {
                return message;
            }
        }

        let description = self.to_string();
        if description.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_owned()
        } else {
            description
        }
    }
}

/// Error raised by a platform capability implemented by the host application.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum PlatformError {
    /// The host reported a failure while servicing the request.
    #[error("Platform error: {message}")]
    Failure {
        #[allow(missing_docs)]
        message: String,
    },
    /// The host threw an exception that could not be mapped to a failure.
    #[error("Platform callback invocation failed")]
    Callback,
}

#[cfg(feature = "uniffi")]
impl From<uniffi::UnexpectedUniFFICallbackError> for PlatformError {
    fn from(_: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::Callback
    }
}

impl PlatformError {
    /// Convenience constructor for [PlatformError::Failure].
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }
}

/// The session has already been established for this client.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("The session is already established")]
pub struct SessionAlreadyEstablishedError;

#[cfg(test)]
mod tests {
    use super::*;

    fn response_error(status: u16, body: &str) -> ApiError {
        ApiError::ResponseContent {
            status: StatusCode::from_u16(status).unwrap(),
            message: body.to_owned(),
        }
    }

    #[test]
    fn test_user_message_prefers_error_field() {
        let err = response_error(400, r#"{"error":"Device already exists","message":"nope"}"#);
        assert_eq!(err.user_message(), "Device already exists");
    }

    #[test]
    fn test_user_message_falls_back_to_message_field() {
        let err = response_error(422, r#"{"message":"Validation failed"}"#);
        assert_eq!(err.user_message(), "Validation failed");
    }

    #[test]
    fn test_user_message_ignores_blank_error_field() {
        let err = response_error(422, r#"{"error":"  ","message":"Validation failed"}"#);
        assert_eq!(err.user_message(), "Validation failed");
    }

    #[test]
    fn test_user_message_malformed_body_uses_status() {
        let err = response_error(500, "<html>Internal Server Error</html>");
        assert_eq!(err.user_message(), "Request failed with status code 500");
    }

    #[test]
    fn test_user_message_empty_body_uses_status() {
        let err = response_error(503, "");
        assert_eq!(err.user_message(), "Request failed with status code 503");
    }

    #[test]
    fn test_user_message_serde_error() {
        let serde_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err = ApiError::from(serde_err);
        assert!(!err.user_message().is_empty());
    }
}
