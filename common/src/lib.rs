//! # Rentr Common
//!
//! Shared building blocks for the rental tracker.
//!
//! * **[`fleet`]**: The records the system tracks: cars, customers and rentals.
//! * **[`error`]**: Structured errors crossing the rental system boundary.
//! * **[`config`]**: Runtime configuration and the seeded fleet.
//! * **[`macros`]**: Status logging shortcuts (`success!`, `info!`, `warn!`, `error!`).

pub mod config;
pub mod error;
pub mod fleet;
pub mod macros;

#[doc(hidden)]
pub use tracing as __tracing;
