use std::{fmt, sync::Arc};

use tracing::info;

use crate::{
	models::{ContractArtifact, PartialState},
	services::store::{ReducerMap, Store, StoreError, VortexStore},
};

/// Custom reducers and initial state handed to a store generator
#[derive(Clone, Default)]
pub struct StoreCustomization {
	pub reducers: ReducerMap,
	pub custom_state: Option<PartialState>,
}

impl fmt::Debug for StoreCustomization {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut fields: Vec<_> = self.reducers.keys().collect();
		fields.sort();
		f.debug_struct("StoreCustomization")
			.field("reducers", &fields)
			.field("custom_state", &self.custom_state)
			.finish()
	}
}

/// Builds stores from contract artifacts.
///
/// Without a customization the generator must fall back to its own default reducers.
pub trait StoreGenerator: Send + Sync {
	fn generate(
		&self,
		contracts: Vec<ContractArtifact>,
		customization: Option<StoreCustomization>,
	) -> Result<Arc<dyn Store>, StoreError>;
}

/// Generator producing [`VortexStore`]s
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultStoreGenerator;

impl StoreGenerator for DefaultStoreGenerator {
	fn generate(
		&self,
		contracts: Vec<ContractArtifact>,
		customization: Option<StoreCustomization>,
	) -> Result<Arc<dyn Store>, StoreError> {
		info!(
			contracts = contracts.len(),
			custom_reducers = customization.as_ref().map_or(0, |c| c.reducers.len()),
			"Generating store"
		);
		Ok(Arc::new(VortexStore::new(contracts, customization)))
	}
}
