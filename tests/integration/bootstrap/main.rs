use std::{sync::Arc, time::Duration};

use tempfile::TempDir;

use vortex::{
	bootstrap::{
		initialize_vortex, load_connection, load_deployed_contracts, wait_for_connection,
		BootstrapConfig,
	},
	models::{Connection, ConnectionStatus, FeedEntry},
	services::{
		connection::{ConnectionLoader, StaticConnectionLoader},
		facade::VortexContext,
	},
	utils::tests::builders::artifact::ArtifactBuilder,
};

fn write_artifacts(dir: &TempDir) {
	let token = ArtifactBuilder::new()
		.name("Token")
		.deployed_on(5777, "0x0000000000000000000000000000000000000a11")
		.deployed_on(4, "0x0000000000000000000000000000000000000004")
		.build_json();
	let exchange = ArtifactBuilder::new()
		.name("Exchange")
		.deployed_on(1, "0x0000000000000000000000000000000000000001")
		.build_json();

	std::fs::write(dir.path().join("Token.json"), token).unwrap();
	std::fs::write(dir.path().join("Exchange.json"), exchange).unwrap();
	std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
}

fn config(dir: &TempDir, networks: Vec<u64>) -> BootstrapConfig {
	BootstrapConfig {
		artifacts_dir: dir.path().to_path_buf(),
		networks,
		timeout: Duration::from_secs(5),
	}
}

fn loader(network_id: u64) -> Arc<dyn ConnectionLoader> {
	Arc::new(StaticConnectionLoader::new(Connection {
		network_id,
		accounts: vec!["0x627306090abab3a6e1400e9345bc60c78a8bef57".to_string()],
	}))
}

#[tokio::test]
async fn test_full_flow() {
	let dir = TempDir::new().unwrap();
	write_artifacts(&dir);
	let context = VortexContext::new();

	let shared = initialize_vortex(&context, &config(&dir, vec![42]), loader(5777)).unwrap();
	{
		let vortex = shared.lock();
		assert!(vortex.is_running());
		// Exchange first (artifacts sorted by name), then Token's ids in ascending order
		assert_eq!(vortex.networks(), &[1, 4, 5777, 42]);
	}

	let connection = load_connection(&shared, Duration::from_secs(5))
		.await
		.unwrap();
	assert_eq!(connection.status, ConnectionStatus::Loaded);
	assert_eq!(connection.network_id, Some(5777));

	let vortex = shared.lock();
	let loaded = load_deployed_contracts(&vortex, &["Token".to_string()]).unwrap();
	assert_eq!(loaded.len(), 1);
	assert_eq!(loaded[0].address, "0x0000000000000000000000000000000000000a11");
	assert_eq!(loaded[0].network_id, Some(5777));

	let state = vortex.store().unwrap().state();
	assert_eq!(
		state.feed,
		vec![
			FeedEntry::ConnectionLoaded { network_id: 5777 },
			FeedEntry::ContractLoaded {
				name: "Token".to_string(),
				address: "0x0000000000000000000000000000000000000a11".to_string(),
			},
		]
	);
}

#[tokio::test]
async fn test_unlisted_network_is_rejected() {
	let dir = TempDir::new().unwrap();
	write_artifacts(&dir);
	let context = VortexContext::new();

	let shared = initialize_vortex(&context, &config(&dir, vec![]), loader(3)).unwrap();
	let connection = load_connection(&shared, Duration::from_secs(5))
		.await
		.unwrap();

	assert_eq!(connection.status, ConnectionStatus::NetworkRejected);

	let vortex = shared.lock();
	assert!(load_deployed_contracts(&vortex, &["Token".to_string()]).is_err());
}

#[tokio::test]
async fn test_contract_not_deployed_on_connected_network() {
	let dir = TempDir::new().unwrap();
	write_artifacts(&dir);
	let context = VortexContext::new();

	let shared = initialize_vortex(&context, &config(&dir, vec![]), loader(4)).unwrap();
	load_connection(&shared, Duration::from_secs(5))
		.await
		.unwrap();

	let vortex = shared.lock();
	let error = load_deployed_contracts(&vortex, &["Exchange".to_string()]).unwrap_err();
	assert_eq!(error.to_string(), "Exchange is not deployed on network 4");
}

#[tokio::test]
async fn test_second_initialization_reuses_running_instance() {
	let dir = TempDir::new().unwrap();
	write_artifacts(&dir);
	let context = VortexContext::new();

	let first = initialize_vortex(&context, &config(&dir, vec![]), loader(4)).unwrap();
	let second = initialize_vortex(&context, &config(&dir, vec![7]), loader(1)).unwrap();

	assert!(Arc::ptr_eq(&first, &second));
	assert!(!second.lock().networks().contains(&7));
}

#[test]
fn test_existing_idle_facade_whitelists_its_own_contracts() {
	let dir = TempDir::new().unwrap();
	write_artifacts(&dir);
	let context = VortexContext::new();
	let vault = ArtifactBuilder::new()
		.name("Vault")
		.deployed_on(99, "0x0000000000000000000000000000000000000099")
		.build();
	context.factory(Some(vec![vault]), loader(99), None, None);

	let shared = initialize_vortex(&context, &config(&dir, vec![7]), loader(1)).unwrap();

	let vortex = shared.lock();
	assert!(vortex.is_running());
	assert_eq!(vortex.networks(), &[99, 7]);
	assert_eq!(vortex.contracts().map(|contracts| contracts.len()), Some(1));
}

#[tokio::test]
async fn test_wait_for_connection_times_out() {
	let dir = TempDir::new().unwrap();
	write_artifacts(&dir);
	let context = VortexContext::new();

	let shared = initialize_vortex(&context, &config(&dir, vec![]), loader(4)).unwrap();
	let store = shared.lock().store().unwrap();

	// Nothing was dispatched, so the connection never settles
	let result = wait_for_connection(store.as_ref(), Duration::from_millis(50)).await;

	assert!(result.is_err());
}

#[test]
fn test_missing_artifacts_directory() {
	let dir = TempDir::new().unwrap();
	let context = VortexContext::new();
	let mut config = config(&dir, vec![]);
	config.artifacts_dir = dir.path().join("missing");

	let result = initialize_vortex(&context, &config, loader(1));

	assert!(result.is_err());
	assert!(context.get().is_none());
}
