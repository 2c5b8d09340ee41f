//! Errors produced by the API client.

use thiserror::Error;

/// Every way a request against the backend can fail.
///
/// Pages only ever show the [`Display`](std::fmt::Display) text, so each
/// variant renders as a message fit for the UI.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
	/// The request never completed (network down, CORS, aborted).
	#[error("network error: {0}")]
	Transport(String),

	/// The server answered with a non-2xx status.
	#[error("{message}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// `detail` from the error body, or `HTTP <status>: <statusText>`.
		message: String,
	},

	/// The body was not the JSON we expected.
	#[error("malformed response: {0}")]
	Decode(String),

	/// The configured base URL cannot be turned into a request URL.
	#[error("invalid request url: {0}")]
	InvalidUrl(String),
}

impl From<url::ParseError> for ApiError {
	fn from(err: url::ParseError) -> Self {
		ApiError::InvalidUrl(err.to_string())
	}
}

impl From<serde_json::Error> for ApiError {
	fn from(err: serde_json::Error) -> Self {
		ApiError::Decode(err.to_string())
	}
}

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_error_displays_only_the_message() {
		let err = ApiError::Status {
			status: 500,
			message: "Error getting nodes: boom".into(),
		};
		assert_eq!(err.to_string(), "Error getting nodes: boom");
	}

	#[test]
	fn json_errors_become_decode_errors() {
		let err: ApiError = serde_json::from_str::<u32>("{").unwrap_err().into();
		assert!(matches!(err, ApiError::Decode(_)));
	}
}
