//! Holder of the single shared facade instance.
//!
//! The process-wide context is reachable through [`VortexContext::global`], but callers may
//! also own a context and pass it explicitly. Either way a context creates its facade at
//! most once: later `factory` calls return the existing instance and drop their arguments.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing::debug;

use crate::{
	models::{ContractArtifact, PartialState},
	services::{connection::ConnectionLoader, facade::Vortex, store::ReducerMap},
};

/// Facade shared between callers
pub type SharedVortex = Arc<Mutex<Vortex>>;

static GLOBAL: VortexContext = VortexContext::new();

#[derive(Debug, Default)]
pub struct VortexContext {
	instance: OnceCell<SharedVortex>,
}

impl VortexContext {
	pub const fn new() -> Self {
		Self {
			instance: OnceCell::new(),
		}
	}

	/// The process-wide context
	pub fn global() -> &'static VortexContext {
		&GLOBAL
	}

	/// Returns the facade of this context, creating it from the arguments on first use
	pub fn factory(
		&self,
		contracts: Option<Vec<ContractArtifact>>,
		connection_loader: Arc<dyn ConnectionLoader>,
		reducers: Option<ReducerMap>,
		custom_state: Option<PartialState>,
	) -> SharedVortex {
		self.factory_with(|| Vortex::new(contracts, connection_loader, reducers, custom_state))
	}

	/// Like [`factory`](Self::factory), building the facade with `init` on first use
	pub fn factory_with(&self, init: impl FnOnce() -> Vortex) -> SharedVortex {
		let mut created = false;
		let instance = self
			.instance
			.get_or_init(|| {
				created = true;
				Arc::new(Mutex::new(init()))
			})
			.clone();

		if created {
			debug!("Created Vortex instance");
		} else {
			debug!("Vortex instance already exists, ignoring new configuration");
		}
		instance
	}

	/// The facade of this context, if it was created
	pub fn get(&self) -> Option<SharedVortex> {
		self.instance.get().cloned()
	}
}
