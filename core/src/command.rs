//! Explicit commands accepted by [`RentalSystem::execute`](crate::system::RentalSystem::execute).
//!
//! Front ends collect the payload however they like (an interactive menu, a
//! test script) and hand a fully typed command to the core.

use rentr_common::fleet::ids::{CarId, CustomerId, RentalId};
use rentr_common::fleet::rental::Rental;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Rent one unit of `car_id` to an already registered customer.
    RentCar {
        car_id: CarId,
        customer_id: CustomerId,
        days: u32,
    },
    /// Close the active rental with the given code.
    ReturnCar { rental_id: RentalId },
    /// Leave the session.
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rented(Rental),
    Returned(Rental),
    Exit,
}
