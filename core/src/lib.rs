//! # Rentr Core
//!
//! The rental logic. Everything here is synchronous and in-memory.
//!
//! * **[`system`]**: The [`system::RentalSystem`] aggregate owning cars, customers and active rentals.
//! * **[`command`]**: The explicit command interface driving the aggregate.
//! * **[`rental_id`]**: Generation of collision-checked rental codes.

pub mod command;
pub mod rental_id;
pub mod system;
