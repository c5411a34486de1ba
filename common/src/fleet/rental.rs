use crate::fleet::ids::{CarId, CustomerId, RentalId};

/// An active rental.
///
/// The car and the customer are referenced by key. Resolving them is up to
/// whoever owns the catalog, so a rental can never dangle into freed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rental {
    id: RentalId,
    car_id: CarId,
    customer_id: CustomerId,
    days: u32,
}

impl Rental {
    pub fn new(id: RentalId, car_id: CarId, customer_id: CustomerId, days: u32) -> Self {
        Self {
            id,
            car_id,
            customer_id,
            days,
        }
    }

    pub fn id(&self) -> &RentalId {
        &self.id
    }

    pub fn car_id(&self) -> &CarId {
        &self.car_id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn days(&self) -> u32 {
        self.days
    }
}
