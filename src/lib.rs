//! Vortex: wires contract artifacts, a blockchain connection loader and a state store
//! together for decentralized application frontends.
//!
//! The entry point is [`services::facade::Vortex`], usually reached through
//! [`services::facade::VortexContext`]:
//!
//! 1. Configure contract artifacts, reducers, initial state and the network whitelist
//! 2. `run` the facade to create the store
//! 3. Dispatch `load_connection` and `load_contract`
//! 4. Read or subscribe to the store state

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
