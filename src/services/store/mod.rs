//! Predictable state container.
//!
//! Provides the pieces the facade coordinates:
//!
//! - Actions and their creators (`connection_load`, `contract_load`)
//! - Built-in and custom reducers
//! - The `Store` trait and its default implementation `VortexStore`
//! - `StoreGenerator`, which turns artifacts and an optional customization into a store

mod action;
mod error;
mod generator;
mod reducer;
#[allow(clippy::module_inception)]
mod store;

pub use action::{connection_load, contract_load, Action, ConnectionLoadRequest};
pub use error::StoreError;
pub use generator::{DefaultStoreGenerator, StoreCustomization, StoreGenerator};
pub use reducer::{reducer, Reducer, ReducerMap};
pub use store::{Store, VortexStore};
