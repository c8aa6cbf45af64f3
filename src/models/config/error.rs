//! Artifact loading error types.

use log::error;
use std::{error::Error, fmt, path::PathBuf};

/// Errors that can occur while loading contract artifacts
#[derive(Debug)]
pub enum ConfigError {
	/// An artifact was parsed but failed validation
	InvalidArtifact { name: String, reason: String },

	/// An artifact file is not valid JSON or does not match the artifact shape
	ParseError(String),

	/// The artifacts directory does not exist
	DirectoryNotFound(PathBuf),

	/// File system error while reading artifacts
	FileError(String),
}

impl ConfigError {
	fn format_message(&self) -> String {
		match self {
			Self::InvalidArtifact { name, reason } => {
				format!("Invalid artifact '{}': {}", name, reason)
			}
			Self::ParseError(msg) => format!("Parse error: {}", msg),
			Self::DirectoryNotFound(path) => {
				format!("Artifacts directory not found: {}", path.display())
			}
			Self::FileError(msg) => format!("File error: {}", msg),
		}
	}

	/// Create a new invalid artifact error and log it
	pub fn invalid_artifact(name: impl Into<String>, reason: impl Into<String>) -> Self {
		let error = Self::InvalidArtifact {
			name: name.into(),
			reason: reason.into(),
		};
		error!("{}", error.format_message());
		error
	}

	/// Create a new parse error and log it
	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new missing directory error and log it
	pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
		let error = Self::DirectoryNotFound(path.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new file error and log it
	pub fn file_error(msg: impl Into<String>) -> Self {
		let error = Self::FileError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		Self::file_error(err.to_string())
	}
}

impl From<serde_json::Error> for ConfigError {
	fn from(err: serde_json::Error) -> Self {
		Self::parse_error(err.to_string())
	}
}
