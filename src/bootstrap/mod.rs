//! Bootstrap helpers for wiring a facade from artifacts on disk.
//!
//! # Flow
//! 1. `initialize_vortex` loads the artifacts, creates the facade through a context,
//!    whitelists the networks the artifacts are deployed on and runs it
//! 2. `load_connection` dispatches the connection load and waits for its outcome
//! 3. `load_deployed_contracts` loads named contracts at their address on the connected
//!    network

use std::{error::Error, path::PathBuf, sync::Arc, time::Duration};

use tracing::{info, warn};

use crate::{
	models::{ConnectionState, ConnectionStatus, ContractInstance, NetworkId},
	repositories::ArtifactService,
	services::{
		connection::ConnectionLoader,
		facade::{SharedVortex, Vortex, VortexContext},
		store::Store,
	},
};

/// Type alias for bootstrap results
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

#[derive(Debug, Clone)]
pub struct BootstrapConfig {
	/// Directory holding the contract artifacts
	pub artifacts_dir: PathBuf,
	/// Network ids whitelisted on top of the ones found in the artifacts
	pub networks: Vec<NetworkId>,
	/// How long to wait for the connection to settle
	pub timeout: Duration,
}

/// Creates (or reuses) the facade of `context` from the artifacts in the configured directory.
///
/// A facade that is already running is returned untouched. A facade that exists but is not
/// running keeps its own contracts, and the networks are taken from them.
pub fn initialize_vortex(
	context: &VortexContext,
	config: &BootstrapConfig,
	connection_loader: Arc<dyn ConnectionLoader>,
) -> Result<SharedVortex> {
	let service = ArtifactService::new_with_path(Some(config.artifacts_dir.as_path()))?;
	let artifacts = service.get_sorted();

	if artifacts.is_empty() {
		warn!(path = %config.artifacts_dir.display(), "No contract artifacts found");
	}

	let shared = context.factory(Some(artifacts.clone()), connection_loader, None, None);
	{
		let mut vortex = shared.lock();
		if vortex.is_running() {
			return Ok(shared.clone());
		}

		// A facade created earlier keeps its own contracts, so whitelist from those
		let contracts = vortex.contracts().map(<[_]>::to_vec).unwrap_or_default();
		for artifact in &contracts {
			vortex.extract_networks_from(artifact);
		}
		for network_id in &config.networks {
			vortex.add_network(*network_id);
		}
		vortex.run()?;

		info!(
			contracts = contracts.len(),
			networks = ?vortex.networks(),
			"Vortex initialized"
		);
	}

	Ok(shared)
}

/// Dispatches a connection load and waits until it is loaded, rejected or failed
pub async fn load_connection(shared: &SharedVortex, timeout: Duration) -> Result<ConnectionState> {
	let store = {
		let vortex = shared.lock();
		vortex.load_connection()?;
		vortex.store()?
	};

	wait_for_connection(store.as_ref(), timeout).await
}

/// Waits until the connection status of `store` is settled
pub async fn wait_for_connection(store: &dyn Store, timeout: Duration) -> Result<ConnectionState> {
	let mut receiver = store.subscribe();
	let connection = {
		let state = tokio::time::timeout(
			timeout,
			receiver.wait_for(|state| state.connection.status.is_settled()),
		)
		.await
		.map_err(|_| format!("connection did not settle within {:?}", timeout))??;
		state.connection.clone()
	};

	Ok(connection)
}

/// Loads each contract in `names` at its deployment address on the connected network
pub fn load_deployed_contracts(vortex: &Vortex, names: &[String]) -> Result<Vec<ContractInstance>> {
	let store = vortex.store()?;
	let connection = store.state().connection;
	let network_id = match (connection.status, connection.network_id) {
		(ConnectionStatus::Loaded, Some(network_id)) => network_id,
		_ => return Err("connection is not loaded".into()),
	};

	let contracts = vortex.contracts().unwrap_or_default();
	for name in names {
		let artifact = contracts
			.iter()
			.find(|artifact| &artifact.contract_name == name)
			.ok_or_else(|| format!("unknown contract {}", name))?;
		let address = artifact
			.address_on(network_id)
			.ok_or_else(|| format!("{} is not deployed on network {}", name, network_id))?;

		vortex.load_contract(name, address)?;
	}

	let state = store.state();
	Ok(names
		.iter()
		.filter_map(|name| {
			state
				.contracts
				.values()
				.find(|instance| &instance.name == name)
				.cloned()
		})
		.collect())
}
