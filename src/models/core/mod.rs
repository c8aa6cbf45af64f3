//! Core domain models.
//!
//! This module contains the fundamental data structures that represent:
//! - Contract artifacts: Build output describing a contract and its deployments
//! - Connections: Outcome of loading a blockchain connection
//! - State: Everything the store keeps track of

mod artifact;
mod connection;
mod state;

pub use artifact::{ContractArtifact, NetworkId, NetworkInstance};
pub use connection::Connection;
pub use state::{
	ConnectionState, ConnectionStatus, ContractInstance, FeedEntry, PartialState, State,
};
