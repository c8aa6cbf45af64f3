//! State held by the store.
//!
//! `State` has three built-in slices (connection, contracts, feed) plus any number of custom
//! slices driven by user supplied reducers. `PartialState` mirrors `State` with every field
//! optional and is used to override the initial state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::NetworkId;

/// Lifecycle of the blockchain connection
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum ConnectionStatus {
	#[default]
	Unloaded,
	Loading,
	Loaded,
	/// The node answered with a network id outside the whitelist
	NetworkRejected,
	Failed,
}

impl ConnectionStatus {
	/// Whether the connection load has reached a final outcome
	pub fn is_settled(&self) -> bool {
		!matches!(self, Self::Unloaded | Self::Loading)
	}
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConnectionState {
	pub status: ConnectionStatus,
	pub network_id: Option<NetworkId>,
	pub accounts: Vec<String>,
	pub error: Option<String>,
}

/// A contract instance loaded at a specific address
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContractInstance {
	pub name: String,
	pub address: String,
	pub network_id: Option<NetworkId>,
}

/// Append-only log of notable store events
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum FeedEntry {
	ConnectionLoaded { network_id: NetworkId },
	ContractLoaded { name: String, address: String },
	Error { message: String },
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct State {
	pub connection: ConnectionState,
	/// Loaded contract instances keyed by address
	pub contracts: BTreeMap<String, ContractInstance>,
	pub feed: Vec<FeedEntry>,
	/// Slices owned by custom reducers
	#[serde(flatten)]
	pub custom: BTreeMap<String, serde_json::Value>,
}

impl State {
	/// Returns the custom slice stored under `field`
	pub fn custom_slice(&self, field: &str) -> Option<&serde_json::Value> {
		self.custom.get(field)
	}
}

/// Initial state override where every field is optional
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct PartialState {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub connection: Option<ConnectionState>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub contracts: Option<BTreeMap<String, ContractInstance>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub feed: Option<Vec<FeedEntry>>,
	#[serde(flatten)]
	pub custom: BTreeMap<String, serde_json::Value>,
}

impl PartialState {
	/// Sets the initial value of a custom slice
	pub fn with_custom(mut self, field: impl Into<String>, value: serde_json::Value) -> Self {
		self.custom.insert(field.into(), value);
		self
	}

	/// Overrides the fields of `state` that are present in this partial state
	pub fn apply_to(&self, mut state: State) -> State {
		if let Some(connection) = &self.connection {
			state.connection = connection.clone();
		}
		if let Some(contracts) = &self.contracts {
			state.contracts = contracts.clone();
		}
		if let Some(feed) = &self.feed {
			state.feed = feed.clone();
		}
		for (field, value) in &self.custom {
			state.custom.insert(field.clone(), value.clone());
		}
		state
	}
}
