//! The Vortex facade.
//!
//! Configuration (artifacts, reducers, initial state, network whitelist) is accumulated
//! first. `run` creates the store from it, after which connection and contract loads can
//! be dispatched. Mutators stay usable after `run` but only affect the next `run` or
//! dispatch.

use std::{fmt, sync::Arc};

use tracing::{debug, info, warn};

use crate::{
	models::{ContractArtifact, NetworkId, PartialState},
	services::{
		connection::ConnectionLoader,
		facade::VortexError,
		store::{
			connection_load, contract_load, DefaultStoreGenerator, Reducer, ReducerMap, Store,
			StoreCustomization, StoreGenerator,
		},
	},
};

pub struct Vortex {
	contracts: Option<Vec<ContractArtifact>>,
	connection_loader: Arc<dyn ConnectionLoader>,
	reducers: Option<ReducerMap>,
	custom_state: Option<PartialState>,
	network_ids: Vec<NetworkId>,
	store: Option<Arc<dyn Store>>,
	store_generator: Arc<dyn StoreGenerator>,
}

impl Vortex {
	/// Creates a facade using the [`DefaultStoreGenerator`].
	///
	/// # Arguments
	/// * `contracts` - Contract artifacts, or `None` to add them later with `add_contract`
	/// * `connection_loader` - Loader resolved when `load_connection` is dispatched
	/// * `reducers` - Custom reducers keyed by state slice (not combined)
	/// * `custom_state` - Initial state override, only used together with `reducers`
	pub fn new(
		contracts: Option<Vec<ContractArtifact>>,
		connection_loader: Arc<dyn ConnectionLoader>,
		reducers: Option<ReducerMap>,
		custom_state: Option<PartialState>,
	) -> Self {
		Self {
			contracts,
			connection_loader,
			reducers,
			custom_state,
			network_ids: Vec::new(),
			store: None,
			store_generator: Arc::new(DefaultStoreGenerator),
		}
	}

	/// Replaces the generator used by `run`
	pub fn with_store_generator(mut self, store_generator: Arc<dyn StoreGenerator>) -> Self {
		self.store_generator = store_generator;
		self
	}

	/// Creates the store from the current configuration.
	///
	/// The generator receives the reducers and custom state only when reducers are
	/// configured. Running again replaces the existing store.
	///
	/// # Errors
	/// - `VortexError::Configuration` if no contracts were given
	/// - `VortexError::Store` if the generator fails
	pub fn run(&mut self) -> Result<(), VortexError> {
		let contracts = match &self.contracts {
			Some(contracts) => contracts.clone(),
			None => {
				warn!("Cannot run without contract artifacts");
				return Err(VortexError::Configuration);
			}
		};

		let customization = self.reducers.as_ref().map(|reducers| StoreCustomization {
			reducers: reducers.clone(),
			custom_state: self.custom_state.clone(),
		});

		if self.store.is_some() {
			warn!("Store is already running, replacing it");
		}

		let store = self.store_generator.generate(contracts, customization)?;
		self.store = Some(store);

		info!(
			contracts = self.contracts.as_ref().map_or(0, Vec::len),
			networks = ?self.network_ids,
			"Vortex is running"
		);
		Ok(())
	}

	/// Dispatches a connection load with the configured loader and a copy of the whitelist
	pub fn load_connection(&self) -> Result<(), VortexError> {
		let store = self.store()?;
		debug!(loader = %self.connection_loader.describe(), "Loading connection");
		store.dispatch(connection_load(
			self.connection_loader.clone(),
			&self.network_ids,
		))?;
		Ok(())
	}

	/// Dispatches a load of the contract `name` deployed at `address`
	pub fn load_contract(&self, name: &str, address: &str) -> Result<(), VortexError> {
		let store = self.store()?;
		debug!(contract = name, address, "Loading contract");
		store.dispatch(contract_load(name, address))?;
		Ok(())
	}

	pub fn add_contract(&mut self, contract: ContractArtifact) {
		self.contracts.get_or_insert_with(Vec::new).push(contract);
	}

	/// Adds a network id to the whitelist
	pub fn add_network(&mut self, network_id: NetworkId) {
		self.network_ids.push(network_id);
	}

	/// Adds every network `contract` is deployed on to the whitelist, in the artifact's
	/// order. Duplicates are kept.
	pub fn extract_networks_from(&mut self, contract: &ContractArtifact) {
		self.network_ids.extend(contract.network_ids());
	}

	/// Sets the reducer of `field`, replacing any previous one
	pub fn add_reducer(&mut self, field: impl Into<String>, reducer: Reducer) {
		self.reducers
			.get_or_insert_with(ReducerMap::new)
			.insert(field.into(), reducer);
	}

	pub fn set_custom_state(&mut self, custom_state: PartialState) {
		self.custom_state = Some(custom_state);
	}

	pub fn contracts(&self) -> Option<&[ContractArtifact]> {
		self.contracts.as_deref()
	}

	/// The running store
	///
	/// # Errors
	/// - `VortexError::NotActivated` if `run` has not succeeded yet
	pub fn store(&self) -> Result<Arc<dyn Store>, VortexError> {
		self.store.clone().ok_or(VortexError::NotActivated)
	}

	/// Network id whitelist
	pub fn networks(&self) -> &[NetworkId] {
		&self.network_ids
	}

	pub fn is_running(&self) -> bool {
		self.store.is_some()
	}
}

impl fmt::Debug for Vortex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut reducers: Vec<_> = self
			.reducers
			.iter()
			.flat_map(|reducers| reducers.keys())
			.collect();
		reducers.sort();

		f.debug_struct("Vortex")
			.field(
				"contracts",
				&self.contracts.as_ref().map(|contracts| {
					contracts
						.iter()
						.map(|c| c.contract_name.as_str())
						.collect::<Vec<_>>()
				}),
			)
			.field("connection_loader", &self.connection_loader.describe())
			.field("reducers", &reducers)
			.field("custom_state", &self.custom_state)
			.field("network_ids", &self.network_ids)
			.field("running", &self.is_running())
			.finish()
	}
}
