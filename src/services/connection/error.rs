//! Connection error types and handling.

use log::error;

/// Represents possible errors while loading a blockchain connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
	/// Transport level failure (connect, timeout, non-success HTTP status)
	RequestError(String),

	/// The node answered with a JSON-RPC error or an unexpected result
	ResponseError(String),

	/// The configured endpoint is not a usable URL
	InvalidUrl(String),
}

impl ConnectionError {
	fn format_message(&self) -> String {
		match self {
			Self::RequestError(msg) => format!("Request error: {}", msg),
			Self::ResponseError(msg) => format!("Response error: {}", msg),
			Self::InvalidUrl(msg) => format!("Invalid URL: {}", msg),
		}
	}

	/// Creates a new request error with logging
	pub fn request_error(msg: impl Into<String>) -> Self {
		let error = Self::RequestError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new response error with logging
	pub fn response_error(msg: impl Into<String>) -> Self {
		let error = Self::ResponseError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new invalid URL error with logging
	pub fn invalid_url(msg: impl Into<String>) -> Self {
		let error = Self::InvalidUrl(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl std::fmt::Display for ConnectionError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for ConnectionError {}

impl From<reqwest_middleware::Error> for ConnectionError {
	fn from(err: reqwest_middleware::Error) -> Self {
		Self::request_error(err.to_string())
	}
}

impl From<reqwest::Error> for ConnectionError {
	fn from(err: reqwest::Error) -> Self {
		Self::request_error(err.to_string())
	}
}
