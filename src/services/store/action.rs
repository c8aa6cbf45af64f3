//! Actions understood by the store and the creators the facade dispatches.

use std::{fmt, sync::Arc};

use crate::{
	models::{Connection, NetworkId},
	services::connection::ConnectionLoader,
};

/// Request to load a connection, restricted to a whitelist of network ids
#[derive(Clone)]
pub struct ConnectionLoadRequest {
	pub loader: Arc<dyn ConnectionLoader>,
	/// Owned copy of the whitelist taken when the action was created.
	/// An empty whitelist accepts every network.
	pub network_whitelist: Vec<NetworkId>,
}

impl ConnectionLoadRequest {
	pub fn accepts(&self, network_id: NetworkId) -> bool {
		self.network_whitelist.is_empty() || self.network_whitelist.contains(&network_id)
	}
}

impl fmt::Debug for ConnectionLoadRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ConnectionLoadRequest")
			.field("loader", &self.loader.describe())
			.field("network_whitelist", &self.network_whitelist)
			.finish()
	}
}

#[derive(Debug, Clone)]
pub enum Action {
	/// Dispatched once to every custom reducer when a store is created
	Init,
	ConnectionLoad(ConnectionLoadRequest),
	ConnectionLoaded(Connection),
	ConnectionRejected {
		network_id: NetworkId,
		whitelist: Vec<NetworkId>,
	},
	ConnectionFailed {
		message: String,
	},
	ContractLoad {
		name: String,
		address: String,
	},
}

impl Action {
	/// Stable name of the action, used in logs
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Init => "INIT",
			Self::ConnectionLoad(_) => "CONNECTION_LOAD",
			Self::ConnectionLoaded(_) => "CONNECTION_LOADED",
			Self::ConnectionRejected { .. } => "CONNECTION_REJECTED",
			Self::ConnectionFailed { .. } => "CONNECTION_FAILED",
			Self::ContractLoad { .. } => "CONTRACT_LOAD",
		}
	}
}

/// Creates a connection load action from a loader and the current whitelist
pub fn connection_load(
	loader: Arc<dyn ConnectionLoader>,
	network_whitelist: &[NetworkId],
) -> Action {
	Action::ConnectionLoad(ConnectionLoadRequest {
		loader,
		network_whitelist: network_whitelist.to_vec(),
	})
}

/// Creates a contract load action for `name` deployed at `address`
pub fn contract_load(name: impl Into<String>, address: impl Into<String>) -> Action {
	Action::ContractLoad {
		name: name.into(),
		address: address.into(),
	}
}
