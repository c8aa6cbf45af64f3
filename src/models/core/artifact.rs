use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Integer identifier of a blockchain network (e.g. 1 for Ethereum mainnet)
pub type NetworkId = u64;

/// Deployment information of a contract on a single network
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInstance {
	pub address: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub transaction_hash: Option<String>,
}

/// Contract build artifact as produced by Truffle-style toolchains.
///
/// Network keys are integer network ids serialized as strings; they are parsed while
/// deserializing and iterated in ascending numeric order whatever the source order.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
	pub contract_name: String,
	#[serde(default = "empty_abi")]
	pub abi: serde_json::Value,
	#[serde(default)]
	pub networks: BTreeMap<NetworkId, NetworkInstance>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bytecode: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub source_path: Option<String>,
}

fn empty_abi() -> serde_json::Value {
	serde_json::Value::Array(Vec::new())
}

impl ContractArtifact {
	/// Creates an artifact with an empty ABI and no deployments
	pub fn new(contract_name: impl Into<String>) -> Self {
		Self {
			contract_name: contract_name.into(),
			abi: empty_abi(),
			networks: BTreeMap::new(),
			bytecode: None,
			source_path: None,
		}
	}

	/// Network ids this contract is deployed on, in ascending order
	pub fn network_ids(&self) -> impl Iterator<Item = NetworkId> + '_ {
		self.networks.keys().copied()
	}

	/// Address of the deployment on `network_id`, if any
	pub fn address_on(&self, network_id: NetworkId) -> Option<&str> {
		self.networks
			.get(&network_id)
			.map(|instance| instance.address.as_str())
	}
}
