//! Contract artifact repository.
//!
//! Loads artifacts once from a directory and serves lookups by contract name.

use std::{
	collections::{BTreeMap, HashMap},
	path::Path,
};

use crate::{
	models::{ConfigLoader, ContractArtifact},
	repositories::error::RepositoryError,
};

pub struct ArtifactRepository {
	pub artifacts: HashMap<String, ContractArtifact>,
}

impl ArtifactRepository {
	pub fn new(path: Option<&Path>) -> Result<Self, RepositoryError> {
		let artifacts = ContractArtifact::load_all(path).map_err(|e| {
			RepositoryError::load_error(format!("Failed to load artifacts: {}", e))
		})?;
		Ok(ArtifactRepository { artifacts })
	}

	/// Builds a repository from artifacts already in memory
	pub fn from_artifacts(artifacts: impl IntoIterator<Item = ContractArtifact>) -> Self {
		ArtifactRepository {
			artifacts: artifacts
				.into_iter()
				.map(|artifact| (artifact.contract_name.clone(), artifact))
				.collect(),
		}
	}
}

pub trait ArtifactRepositoryTrait {
	fn get(&self, name: &str) -> Option<ContractArtifact>;
	fn get_all(&self) -> HashMap<String, ContractArtifact>;
}

impl ArtifactRepositoryTrait for ArtifactRepository {
	fn get(&self, name: &str) -> Option<ContractArtifact> {
		self.artifacts.get(name).cloned()
	}

	fn get_all(&self) -> HashMap<String, ContractArtifact> {
		self.artifacts.clone()
	}
}

pub struct ArtifactService<T: ArtifactRepositoryTrait> {
	repository: T,
}

impl<T: ArtifactRepositoryTrait> ArtifactService<T> {
	pub fn new_with_repository(repository: T) -> Self {
		ArtifactService { repository }
	}

	pub fn get(&self, name: &str) -> Option<ContractArtifact> {
		self.repository.get(name)
	}

	pub fn get_all(&self) -> HashMap<String, ContractArtifact> {
		self.repository.get_all()
	}

	/// All artifacts ordered by contract name
	pub fn get_sorted(&self) -> Vec<ContractArtifact> {
		self.repository
			.get_all()
			.into_iter()
			.collect::<BTreeMap<_, _>>()
			.into_values()
			.collect()
	}

	/// Looks up each of `names`, failing on the first one that is missing
	pub fn get_many(&self, names: &[String]) -> Result<Vec<ContractArtifact>, RepositoryError> {
		names
			.iter()
			.map(|name| {
				self.repository
					.get(name)
					.ok_or_else(|| RepositoryError::not_found(name))
			})
			.collect()
	}
}

impl ArtifactService<ArtifactRepository> {
	pub fn new_with_path(path: Option<&Path>) -> Result<Self, RepositoryError> {
		let repository = ArtifactRepository::new(path)?;
		Ok(ArtifactService { repository })
	}
}
