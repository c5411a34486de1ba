use thiserror::Error;

use crate::fleet::ids::{CarId, CustomerId, RentalId};

/// Everything that can go wrong inside the rental system.
///
/// None of these are fatal: callers report them and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalError {
    #[error("car {car_id} is not available for rent")]
    CarUnavailable { car_id: CarId },

    #[error("no active rental with id {rental_id}")]
    RentalNotFound { rental_id: RentalId },

    #[error("car {car_id} is not in the catalog")]
    CarNotFound { car_id: CarId },

    #[error("customer {customer_id} is not registered")]
    CustomerNotFound { customer_id: CustomerId },

    #[error("car {car_id} is already in the catalog")]
    DuplicateCar { car_id: CarId },

    #[error("customer {customer_id} is already registered")]
    DuplicateCustomer { customer_id: CustomerId },

    #[error("a rental must last at least one day")]
    InvalidDuration,
}

/// Failures while parsing a fleet entry (`ID,BRAND,MODEL,PRICE,STOCK`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("expected ID,BRAND,MODEL,PRICE,STOCK but got {fields} field(s) in '{input}'")]
    FieldCount { input: String, fields: usize },

    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("invalid daily price '{value}'")]
    InvalidPrice { value: String },

    #[error("invalid stock '{value}'")]
    InvalidStock { value: String },
}
