//! Error types for repository operations.

use log::error;
use std::error::Error;
use std::fmt;

/// Errors that can occur during repository operations
#[derive(Debug)]
pub enum RepositoryError {
	/// Loading artifacts from disk failed
	LoadError(String),

	/// A requested artifact is not in the repository
	NotFound(String),
}

impl RepositoryError {
	fn format_message(&self) -> String {
		match self {
			Self::LoadError(msg) => format!("Load error: {}", msg),
			Self::NotFound(name) => format!("Artifact not found: {}", name),
		}
	}

	/// Create a new load error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn load_error(msg: impl Into<String>) -> Self {
		let error = Self::LoadError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new not found error for the given artifact name
	pub fn not_found(name: impl Into<String>) -> Self {
		let error = Self::NotFound(name.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for RepositoryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for RepositoryError {}
