//! Domain models and data structures.
//!
//! - `config`: Artifact loading and validation
//! - `core`: Core domain models (ContractArtifact, Connection, State)

mod config;
mod core;

pub use self::core::{
	Connection, ConnectionState, ConnectionStatus, ContractArtifact, ContractInstance, FeedEntry,
	NetworkId, NetworkInstance, PartialState, State,
};

pub use config::{ConfigError, ConfigLoader};
