use thiserror::Error;

use crate::services::store::StoreError;

#[derive(Debug, Error)]
pub enum VortexError {
	/// `run` was called before any contract artifact was configured
	#[error("No Contracts Given")]
	Configuration,

	/// A store operation was requested before a successful `run`
	#[error("Call run before")]
	NotActivated,

	/// Failure reported by the store, passed through as is
	#[error(transparent)]
	Store(#[from] StoreError),
}
