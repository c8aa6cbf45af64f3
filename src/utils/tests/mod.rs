//! Test helper utilities
//!
//! - `builders`: Builders for creating test instances of models

pub mod builders {
	pub mod artifact;
}

pub use builders::*;
