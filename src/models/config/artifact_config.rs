use std::path::Path;

use tracing::{debug, warn};

use crate::models::{ConfigError, ConfigLoader, ContractArtifact};

use super::DEFAULT_ARTIFACTS_DIR;

/// Length in bytes of a contract address
const ADDRESS_LEN: usize = 20;

fn is_hex_address(address: &str) -> bool {
	address
		.strip_prefix("0x")
		.and_then(|address_without_prefix| hex::decode(address_without_prefix).ok())
		.is_some_and(|address_bytes| address_bytes.len() == ADDRESS_LEN)
}

impl ConfigLoader for ContractArtifact {
	/// Loads every artifact in `path`, keyed by contract name.
	///
	/// Files that are not JSON, or that fail to parse or validate, are skipped.
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		let artifacts_dir = path.unwrap_or(Path::new(DEFAULT_ARTIFACTS_DIR));
		let mut pairs = Vec::new();

		if !artifacts_dir.exists() {
			return Err(ConfigError::directory_not_found(artifacts_dir));
		}

		for entry in std::fs::read_dir(artifacts_dir)? {
			let path = entry?.path();

			if !Self::is_json_file(&path) {
				continue;
			}

			match Self::load_from_path(&path) {
				Ok(artifact) => {
					debug!(
						contract = %artifact.contract_name,
						path = %path.display(),
						"Loaded contract artifact"
					);
					pairs.push((artifact.contract_name.clone(), artifact));
				}
				Err(e) => {
					warn!(path = %path.display(), error = %e, "Skipping contract artifact");
				}
			}
		}

		Ok(T::from_iter(pairs))
	}

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path)?;
		let artifact: ContractArtifact = serde_json::from_reader(std::io::BufReader::new(file))?;

		artifact.validate()?;

		Ok(artifact)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.contract_name.trim().is_empty() {
			return Err(ConfigError::invalid_artifact(
				&self.contract_name,
				"contractName must not be empty",
			));
		}

		if !self.abi.is_array() {
			return Err(ConfigError::invalid_artifact(
				&self.contract_name,
				"abi must be an array",
			));
		}

		for (network_id, instance) in &self.networks {
			if !is_hex_address(&instance.address) {
				return Err(ConfigError::invalid_artifact(
					&self.contract_name,
					format!(
						"address on network {} must be a 0x-prefixed 20-byte hex string, got '{}'",
						network_id, instance.address
					),
				));
			}
		}

		Ok(())
	}
}
