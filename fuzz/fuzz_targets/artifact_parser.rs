#![no_main]

use libfuzzer_sys::fuzz_target;
use vortex::models::{ConfigLoader, ContractArtifact};

fuzz_target!(|data: &[u8]| {
	if let Ok(artifact) = serde_json::from_slice::<ContractArtifact>(data) {
		let _ = artifact.validate();
		let ids: Vec<_> = artifact.network_ids().collect();
		assert_eq!(ids.len(), artifact.networks.len());
	}
});
