//! Store trait and its default implementation.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::{runtime::Handle, sync::watch};
use tracing::{debug, info, warn};

use crate::{
	models::{ContractArtifact, State},
	services::store::{
		reducer::reduce, Action, ConnectionLoadRequest, ReducerMap, StoreCustomization,
		StoreError,
	},
};

/// A predictable state container
pub trait Store: Send + Sync {
	/// Runs `action` through the reducers. May start asynchronous work that dispatches
	/// follow-up actions; that work is not awaited.
	fn dispatch(&self, action: Action) -> Result<(), StoreError>;

	/// Snapshot of the current state
	fn state(&self) -> State;

	/// Receiver notified after every dispatched action
	fn subscribe(&self) -> watch::Receiver<State>;
}

struct StoreInner {
	artifacts: Vec<ContractArtifact>,
	reducers: ReducerMap,
	state: watch::Sender<State>,
	/// Sequence number of the latest connection load; only its outcome is recorded
	connection_load: Mutex<u64>,
}

/// Default store: built-in connection, contracts and feed slices plus custom reducers.
///
/// Cloning is cheap and clones share the same state.
#[derive(Clone)]
pub struct VortexStore {
	inner: Arc<StoreInner>,
}

impl VortexStore {
	pub fn new(
		artifacts: Vec<ContractArtifact>,
		customization: Option<StoreCustomization>,
	) -> Self {
		let (reducers, custom_state) = match customization {
			Some(customization) => (customization.reducers, customization.custom_state),
			None => (ReducerMap::new(), None),
		};

		let mut state = match &custom_state {
			Some(partial) => partial.apply_to(State::default()),
			None => State::default(),
		};
		for field in reducers.keys() {
			state.custom.entry(field.clone()).or_insert(Value::Null);
		}
		reduce(&mut state, &Action::Init, &reducers);

		let (sender, _) = watch::channel(state);

		Self {
			inner: Arc::new(StoreInner {
				artifacts,
				reducers,
				state: sender,
				connection_load: Mutex::new(0),
			}),
		}
	}

	fn apply(&self, action: &Action) {
		self.inner
			.state
			.send_modify(|state| reduce(state, action, &self.inner.reducers));
	}

	async fn complete_connection_load(&self, request: ConnectionLoadRequest, sequence: u64) {
		let outcome = match request.loader.load().await {
			Ok(connection) if request.accepts(connection.network_id) => {
				info!(
					network_id = connection.network_id,
					accounts = connection.accounts.len(),
					"Connection loaded"
				);
				Action::ConnectionLoaded(connection)
			}
			Ok(connection) => {
				warn!(
					network_id = connection.network_id,
					whitelist = ?request.network_whitelist,
					"Connection rejected, network is not whitelisted"
				);
				Action::ConnectionRejected {
					network_id: connection.network_id,
					whitelist: request.network_whitelist,
				}
			}
			Err(e) => Action::ConnectionFailed {
				message: e.to_string(),
			},
		};

		let latest = self.inner.connection_load.lock();
		if *latest != sequence {
			debug!(
				sequence,
				latest = *latest,
				"Dropping outcome of a superseded connection load"
			);
			return;
		}
		if let Err(e) = self.dispatch(outcome) {
			warn!(error = %e, "Failed to record connection outcome");
		}
	}
}

impl Store for VortexStore {
	fn dispatch(&self, action: Action) -> Result<(), StoreError> {
		debug!(action = action.kind(), "Dispatching action");

		match action {
			Action::ConnectionLoad(request) => {
				let handle = Handle::try_current().map_err(|e| {
					StoreError::runtime_error(format!(
						"connection load needs a tokio runtime: {}",
						e
					))
				})?;

				let sequence = {
					let mut latest = self.inner.connection_load.lock();
					*latest += 1;
					self.apply(&Action::ConnectionLoad(request.clone()));
					*latest
				};

				let store = self.clone();
				handle.spawn(async move {
					store.complete_connection_load(request, sequence).await
				});
				Ok(())
			}
			Action::ContractLoad { ref name, .. } => {
				if !self
					.inner
					.artifacts
					.iter()
					.any(|artifact| &artifact.contract_name == name)
				{
					return Err(StoreError::unknown_contract(name));
				}
				self.apply(&action);
				Ok(())
			}
			action => {
				self.apply(&action);
				Ok(())
			}
		}
	}

	fn state(&self) -> State {
		self.inner.state.borrow().clone()
	}

	fn subscribe(&self) -> watch::Receiver<State> {
		self.inner.state.subscribe()
	}
}
