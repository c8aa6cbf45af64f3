use serde_json::json;
use std::sync::Arc;

use vortex::{
	models::{ContractArtifact, PartialState},
	services::{
		connection::ConnectionLoader,
		facade::{Vortex, VortexError},
		store::{reducer, Action, ReducerMap, Store, StoreError},
	},
	utils::tests::builders::artifact::ArtifactBuilder,
};

use crate::integration::mocks::{MockConnectionLoader, MockStore, MockStoreGenerator};

fn loader() -> Arc<dyn ConnectionLoader> {
	let mut loader = MockConnectionLoader::new();
	loader
		.expect_describe()
		.returning(|| "mock loader".to_string());
	Arc::new(loader)
}

fn token() -> ContractArtifact {
	ArtifactBuilder::new()
		.name("Token")
		.deployed_on(1, "0x01")
		.deployed_on(4, "0x04")
		.build()
}

fn same_store(a: &Arc<dyn Store>, b: &Arc<dyn Store>) -> bool {
	std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

fn generator_returning(store: Arc<dyn Store>) -> MockStoreGenerator {
	let mut generator = MockStoreGenerator::new();
	generator
		.expect_generate()
		.times(1)
		.returning(move |_, _| Ok(store.clone()));
	generator
}

#[test]
fn test_run_passes_reducers_and_custom_state() {
	let store: Arc<dyn Store> = Arc::new(MockStore::new());
	let expected_store = store.clone();

	let mut generator = MockStoreGenerator::new();
	generator
		.expect_generate()
		.withf(|contracts, customization| {
			let Some(customization) = customization else {
				return false;
			};
			contracts == &vec![token()]
				&& customization.reducers.len() == 1
				&& customization.reducers.contains_key("x")
				&& customization.custom_state
					== Some(PartialState::default().with_custom("x", json!(0)))
		})
		.times(1)
		.returning(move |_, _| Ok(store.clone()));

	let mut reducers = ReducerMap::new();
	reducers.insert("x".to_string(), reducer(|current, _| current.clone()));

	let mut vortex = Vortex::new(
		Some(vec![token()]),
		loader(),
		Some(reducers),
		Some(PartialState::default().with_custom("x", json!(0))),
	)
	.with_store_generator(Arc::new(generator));

	vortex.run().unwrap();

	assert!(vortex.is_running());
	assert!(same_store(&vortex.store().unwrap(), &expected_store));
}

#[test]
fn test_run_without_reducers_omits_customization() {
	let mut generator = MockStoreGenerator::new();
	generator
		.expect_generate()
		.withf(|contracts, customization| contracts == &vec![token()] && customization.is_none())
		.times(1)
		.returning(|_, _| Ok(Arc::new(MockStore::new())));

	let mut vortex = Vortex::new(Some(vec![token()]), loader(), None, None)
		.with_store_generator(Arc::new(generator));
	// Custom state alone is not forwarded
	vortex.set_custom_state(PartialState::default().with_custom("x", json!(1)));

	vortex.run().unwrap();
}

#[test]
fn test_reducer_added_later_enables_customization() {
	let mut generator = MockStoreGenerator::new();
	generator
		.expect_generate()
		.withf(|_, customization| {
			customization.as_ref().is_some_and(|c| {
				c.reducers.contains_key("counter") && c.custom_state.is_none()
			})
		})
		.times(1)
		.returning(|_, _| Ok(Arc::new(MockStore::new())));

	let mut vortex = Vortex::new(None, loader(), None, None)
		.with_store_generator(Arc::new(generator));
	vortex.add_contract(token());
	vortex.add_reducer("counter", reducer(|_, _| json!(0)));

	vortex.run().unwrap();
}

#[test]
fn test_run_without_contracts_never_generates() {
	let mut generator = MockStoreGenerator::new();
	generator.expect_generate().times(0);

	let mut vortex = Vortex::new(None, loader(), None, None)
		.with_store_generator(Arc::new(generator));

	let result = vortex.run();

	assert!(matches!(result, Err(VortexError::Configuration)));
	assert_eq!(result.unwrap_err().to_string(), "No Contracts Given");
	assert!(matches!(vortex.store(), Err(VortexError::NotActivated)));
}

#[test]
fn test_generator_errors_surface_unchanged() {
	let mut generator = MockStoreGenerator::new();
	generator
		.expect_generate()
		.times(1)
		.returning(|_, _| Err(StoreError::InternalError("reducers clash".to_string())));

	let mut vortex = Vortex::new(Some(vec![token()]), loader(), None, None)
		.with_store_generator(Arc::new(generator));

	let result = vortex.run();

	assert!(matches!(
		result,
		Err(VortexError::Store(StoreError::InternalError(ref msg))) if msg == "reducers clash"
	));
	assert!(!vortex.is_running());
}

#[test]
fn test_rerun_replaces_store() {
	let first: Arc<dyn Store> = Arc::new(MockStore::new());
	let second: Arc<dyn Store> = Arc::new(MockStore::new());
	let stores = vec![first.clone(), second.clone()];

	let mut generator = MockStoreGenerator::new();
	let mut call = 0;
	generator.expect_generate().times(2).returning(move |_, _| {
		let store = stores[call].clone();
		call += 1;
		Ok(store)
	});

	let mut vortex = Vortex::new(Some(vec![token()]), loader(), None, None)
		.with_store_generator(Arc::new(generator));

	vortex.run().unwrap();
	assert!(same_store(&vortex.store().unwrap(), &first));

	vortex.run().unwrap();
	assert!(same_store(&vortex.store().unwrap(), &second));
}

#[test]
fn test_load_contract_dispatches_once() {
	let mut store = MockStore::new();
	store
		.expect_dispatch()
		.withf(|action| {
			matches!(
				action,
				Action::ContractLoad { name, address } if name == "Token" && address == "0xabc"
			)
		})
		.times(1)
		.returning(|_| Ok(()));

	let mut vortex = Vortex::new(Some(vec![token()]), loader(), None, None)
		.with_store_generator(Arc::new(generator_returning(Arc::new(store))));
	vortex.run().unwrap();

	vortex.load_contract("Token", "0xabc").unwrap();
}

#[test]
fn test_load_connection_dispatches_whitelist_snapshot() {
	let mut store = MockStore::new();
	store
		.expect_dispatch()
		.withf(|action| match action {
			Action::ConnectionLoad(request) => {
				request.network_whitelist == vec![1, 4, 42]
					&& request.loader.describe() == "mock loader"
			}
			_ => false,
		})
		.times(1)
		.returning(|_| Ok(()));

	let mut vortex = Vortex::new(Some(vec![token()]), loader(), None, None)
		.with_store_generator(Arc::new(generator_returning(Arc::new(store))));
	vortex.extract_networks_from(&token());
	vortex.add_network(42);
	vortex.run().unwrap();

	vortex.load_connection().unwrap();
	vortex.add_network(3);

	assert_eq!(vortex.networks(), &[1, 4, 42, 3]);
}

#[test]
fn test_dispatch_errors_surface_unchanged() {
	let mut store = MockStore::new();
	store
		.expect_dispatch()
		.times(1)
		.returning(|_| Err(StoreError::UnknownContract("Missing".to_string())));

	let mut vortex = Vortex::new(Some(vec![token()]), loader(), None, None)
		.with_store_generator(Arc::new(generator_returning(Arc::new(store))));
	vortex.run().unwrap();

	let result = vortex.load_contract("Missing", "0x01");

	assert!(matches!(
		result,
		Err(VortexError::Store(StoreError::UnknownContract(ref name))) if name == "Missing"
	));
}

#[test]
fn test_operations_before_run_are_rejected() {
	let mut generator = MockStoreGenerator::new();
	generator.expect_generate().times(0);

	let vortex = Vortex::new(Some(vec![token()]), loader(), None, None)
		.with_store_generator(Arc::new(generator));

	assert!(matches!(vortex.load_connection(), Err(VortexError::NotActivated)));
	assert!(matches!(
		vortex.load_contract("Token", "0xabc"),
		Err(VortexError::NotActivated)
	));
	assert!(matches!(vortex.store(), Err(VortexError::NotActivated)));
}
