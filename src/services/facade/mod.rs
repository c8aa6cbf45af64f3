//! Facade wiring contract artifacts, a connection loader and a store together.
//!
//! - `Vortex`: accumulates configuration, creates the store on `run` and dispatches
//!   lifecycle actions through it
//! - `VortexContext`: lazily initialized holder of the single shared `Vortex`

mod context;
mod error;
mod vortex;

pub use context::{SharedVortex, VortexContext};
pub use error::VortexError;
pub use vortex::Vortex;
