//! # Fleet Records
//!
//! The three records the rental system keeps track of.
//!
//! * [`car::Car`]: A rentable model with a mutable stock counter.
//! * [`customer::Customer`]: An immutable identity, registered when a rental starts.
//! * [`rental::Rental`]: The link between a car, a customer and a duration.
//!
//! Rentals never own the car or the customer. They hold the keys from
//! [`ids`] and the rental system resolves them against its own collections.

pub mod car;
pub mod customer;
pub mod ids;
pub mod rental;
