//! Store error types and handling.

use log::error;
use std::{error::Error, fmt};

/// Errors surfaced by store generation and dispatch
#[derive(Debug)]
pub enum StoreError {
	/// A contract load named an artifact the store was not generated with
	UnknownContract(String),

	/// Asynchronous work was requested outside of a tokio runtime
	RuntimeError(String),

	/// Internal errors within the store
	InternalError(String),
}

impl StoreError {
	fn format_message(&self) -> String {
		match self {
			Self::UnknownContract(name) => format!("Unknown contract: {}", name),
			Self::RuntimeError(msg) => format!("Runtime error: {}", msg),
			Self::InternalError(msg) => format!("Internal error: {}", msg),
		}
	}

	/// Creates a new unknown contract error with logging
	pub fn unknown_contract(name: impl Into<String>) -> Self {
		let error = Self::UnknownContract(name.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new runtime error with logging
	pub fn runtime_error(msg: impl Into<String>) -> Self {
		let error = Self::RuntimeError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new internal error with logging
	pub fn internal_error(msg: impl Into<String>) -> Self {
		let error = Self::InternalError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for StoreError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for StoreError {}
