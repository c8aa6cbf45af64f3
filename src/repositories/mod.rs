//! Repositories giving access to loaded contract artifacts.

mod artifact;
mod error;

pub use artifact::{ArtifactRepository, ArtifactRepositoryTrait, ArtifactService};
pub use error::RepositoryError;
