//! Services coordinated by the facade.
//!
//! - `connection`: Loading a blockchain connection
//! - `store`: State container, reducers and actions
//! - `facade`: The `Vortex` facade and its shared context

pub mod connection;
pub mod facade;
pub mod store;
