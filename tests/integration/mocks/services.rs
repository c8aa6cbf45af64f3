use async_trait::async_trait;
use mockall::mock;
use std::sync::Arc;
use tokio::sync::watch;

use vortex::{
	models::{Connection, ContractArtifact, State},
	services::{
		connection::{ConnectionError, ConnectionLoader},
		store::{Action, Store, StoreCustomization, StoreError, StoreGenerator},
	},
};

mock! {
	pub Store {}

	impl Store for Store {
		fn dispatch(&self, action: Action) -> Result<(), StoreError>;
		fn state(&self) -> State;
		fn subscribe(&self) -> watch::Receiver<State>;
	}
}

mock! {
	pub StoreGenerator {}

	impl StoreGenerator for StoreGenerator {
		fn generate(
			&self,
			contracts: Vec<ContractArtifact>,
			customization: Option<StoreCustomization>,
		) -> Result<Arc<dyn Store>, StoreError>;
	}
}

mock! {
	pub ConnectionLoader {}

	#[async_trait]
	impl ConnectionLoader for ConnectionLoader {
		async fn load(&self) -> Result<Connection, ConnectionError>;
		fn describe(&self) -> String;
	}
}
