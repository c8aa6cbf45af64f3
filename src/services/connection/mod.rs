//! Blockchain connection loading.
//!
//! A connection loader is the handle the facade is configured with. Loading it resolves
//! the network id and the accounts available on the node.

mod error;
mod http;
mod loader;

pub use error::ConnectionError;
pub use http::HttpConnectionLoader;
pub use loader::{ConnectionLoader, StaticConnectionLoader};
