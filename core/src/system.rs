//! The rental system aggregate.
//!
//! [`RentalSystem`] owns the canonical collections of cars, customers and
//! active rentals, each keyed by id. Every mutation goes through `&mut self`,
//! so the stock check and the stock decrement in [`RentalSystem::rent_car`]
//! can never interleave with another operation.

use std::collections::HashMap;

use tracing::debug;

use rentr_common::error::RentalError;
use rentr_common::fleet::car::Car;
use rentr_common::fleet::customer::Customer;
use rentr_common::fleet::ids::{CarId, CustomerId, RentalId};
use rentr_common::fleet::rental::Rental;

use crate::command::{Command, Outcome};
use crate::rental_id::RentalIdGenerator;

/// Price preview for renting a car, shown before the customer confirms.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub car_id: CarId,
    pub car_name: String,
    pub days: u32,
    pub total_price: f64,
}

#[derive(Debug, Default)]
pub struct RentalSystem {
    cars: HashMap<CarId, Car>,
    customers: HashMap<CustomerId, Customer>,
    rentals: HashMap<RentalId, Rental>,
    id_gen: RentalIdGenerator,
}

impl RentalSystem {
    pub fn new() -> Self {
        Self::with_id_generator(RentalIdGenerator::new())
    }

    pub fn with_id_generator(id_gen: RentalIdGenerator) -> Self {
        Self {
            cars: HashMap::new(),
            customers: HashMap::new(),
            rentals: HashMap::new(),
            id_gen,
        }
    }

    /// Builds a system whose catalog holds `cars`.
    ///
    /// Fails on the first duplicate car id.
    pub fn from_cars<I>(cars: I, id_gen: RentalIdGenerator) -> Result<Self, RentalError>
    where
        I: IntoIterator<Item = Car>,
    {
        let mut system = Self::with_id_generator(id_gen);
        for car in cars {
            system.add_car(car)?;
        }
        Ok(system)
    }

    /// Adds a car to the catalog.
    ///
    /// A car whose id is already present is rejected and the one added first
    /// stays in place.
    pub fn add_car(&mut self, car: Car) -> Result<(), RentalError> {
        if self.cars.contains_key(car.id()) {
            return Err(RentalError::DuplicateCar {
                car_id: car.id().clone(),
            });
        }
        debug!(car = %car.id(), stock = car.available_in_stock(), "car added to catalog");
        self.cars.insert(car.id().clone(), car);
        Ok(())
    }

    /// Adds a customer. Duplicate ids are rejected like in [`Self::add_car`].
    pub fn add_customer(&mut self, customer: Customer) -> Result<(), RentalError> {
        if self.customers.contains_key(customer.id()) {
            return Err(RentalError::DuplicateCustomer {
                customer_id: customer.id().clone(),
            });
        }
        debug!(customer = %customer.id(), "customer registered");
        self.customers.insert(customer.id().clone(), customer);
        Ok(())
    }

    /// Registers a new customer under the next sequential id (`CUS1`, `CUS2`, ...).
    pub fn register_customer(&mut self, name: impl Into<String>) -> CustomerId {
        let mut n = self.customers.len() + 1;
        while self.customers.contains_key(&CustomerId::sequential(n)) {
            n += 1;
        }
        let id = CustomerId::sequential(n);
        debug!(customer = %id, "customer registered");
        self.customers.insert(id.clone(), Customer::new(id.clone(), name));
        id
    }

    /// Prices a rental of `days` days without touching any state.
    pub fn quote(&self, car_id: &CarId, days: u32) -> Result<Quote, RentalError> {
        let car = self.find_car(car_id)?;
        if !car.is_available() {
            return Err(RentalError::CarUnavailable {
                car_id: car_id.clone(),
            });
        }
        Ok(Quote {
            car_id: car_id.clone(),
            car_name: car.display_name(),
            days,
            total_price: car.calculate_price(i64::from(days)),
        })
    }

    /// Rents one unit of `car_id` to `customer_id` for `days` days.
    ///
    /// On success the car's stock drops by exactly one and the new rental is
    /// both stored and returned. On any error nothing changes.
    pub fn rent_car(
        &mut self,
        car_id: &CarId,
        customer_id: &CustomerId,
        days: u32,
    ) -> Result<Rental, RentalError> {
        if days == 0 {
            return Err(RentalError::InvalidDuration);
        }
        if !self.customers.contains_key(customer_id) {
            return Err(RentalError::CustomerNotFound {
                customer_id: customer_id.clone(),
            });
        }

        let car = self
            .cars
            .get_mut(car_id)
            .ok_or_else(|| RentalError::CarNotFound {
                car_id: car_id.clone(),
            })?;
        car.rent()?;
        let stock = car.available_in_stock();

        let rentals = &self.rentals;
        let rental_id = self.id_gen.next_unique(|id| rentals.contains_key(id));
        let rental = Rental::new(rental_id, car_id.clone(), customer_id.clone(), days);

        debug!(rental = %rental.id(), car = %car_id, stock, "car rented");
        self.rentals.insert(rental.id().clone(), rental.clone());
        Ok(rental)
    }

    /// Closes the active rental `rental_id` and puts its car back in stock.
    ///
    /// Returns the closed rental. An unknown id leaves everything as it was.
    pub fn return_car(&mut self, rental_id: &RentalId) -> Result<Rental, RentalError> {
        let rental = self
            .rentals
            .remove(rental_id)
            .ok_or_else(|| RentalError::RentalNotFound {
                rental_id: rental_id.clone(),
            })?;

        // Cars are never removed from the catalog, so the lookup only misses
        // if the rental was forged outside this system.
        if let Some(car) = self.cars.get_mut(rental.car_id()) {
            car.return_car();
            debug!(
                rental = %rental_id,
                car = %car.id(),
                stock = car.available_in_stock(),
                "car returned"
            );
        }
        Ok(rental)
    }

    /// Runs a single command.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, RentalError> {
        match command {
            Command::RentCar {
                car_id,
                customer_id,
                days,
            } => self
                .rent_car(&car_id, &customer_id, days)
                .map(Outcome::Rented),
            Command::ReturnCar { rental_id } => self.return_car(&rental_id).map(Outcome::Returned),
            Command::Exit => Ok(Outcome::Exit),
        }
    }

    pub fn car(&self, car_id: &CarId) -> Option<&Car> {
        self.cars.get(car_id)
    }

    pub fn customer(&self, customer_id: &CustomerId) -> Option<&Customer> {
        self.customers.get(customer_id)
    }

    pub fn rental(&self, rental_id: &RentalId) -> Option<&Rental> {
        self.rentals.get(rental_id)
    }

    /// Whole catalog, sorted by car id.
    pub fn cars(&self) -> Vec<&Car> {
        let mut cars: Vec<&Car> = self.cars.values().collect();
        cars.sort_by(|a, b| a.id().cmp(b.id()));
        cars
    }

    /// Cars with at least one unit in stock, sorted by car id.
    pub fn available_cars(&self) -> Vec<&Car> {
        self.cars()
            .into_iter()
            .filter(|car| car.is_available())
            .collect()
    }

    /// Registered customers, in no particular order.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    /// Active rentals, in no particular order. Look rentals up by id with
    /// [`Self::rental`] instead of relying on position.
    pub fn rentals(&self) -> impl Iterator<Item = &Rental> {
        self.rentals.values()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn rental_count(&self) -> usize {
        self.rentals.len()
    }

    fn find_car(&self, car_id: &CarId) -> Result<&Car, RentalError> {
        self.cars.get(car_id).ok_or_else(|| RentalError::CarNotFound {
            car_id: car_id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> RentalSystem {
        let cars = [
            Car::new("C001", "Toyota", "Camry", 60.0, 5),
            Car::new("C002", "Honda", "Accord", 70.0, 0),
        ];
        RentalSystem::from_cars(cars, RentalIdGenerator::seeded(1)).unwrap()
    }

    fn stock(system: &RentalSystem, car_id: &str) -> u32 {
        system
            .car(&CarId::from(car_id))
            .map(Car::available_in_stock)
            .unwrap()
    }

    #[test]
    fn add_car_rejects_duplicate_ids_and_keeps_the_first() {
        let mut system = system();

        let duplicate = Car::new("C001", "Fake", "Car", 1.0, 99);
        assert_eq!(
            system.add_car(duplicate),
            Err(RentalError::DuplicateCar {
                car_id: CarId::from("C001")
            })
        );
        assert_eq!(system.cars().len(), 2);
        assert_eq!(stock(&system, "C001"), 5);
    }

    #[test]
    fn add_customer_rejects_duplicate_ids() {
        let mut system = system();

        assert!(system.add_customer(Customer::new("CUS9", "Ada")).is_ok());
        assert!(matches!(
            system.add_customer(Customer::new("CUS9", "Grace")),
            Err(RentalError::DuplicateCustomer { .. })
        ));
        assert_eq!(system.customer_count(), 1);
    }

    #[test]
    fn register_customer_assigns_sequential_ids() {
        let mut system = system();

        assert_eq!(system.register_customer("Ada").as_str(), "CUS1");
        assert_eq!(system.register_customer("Grace").as_str(), "CUS2");

        // A manually added CUS4 pushes the next registration past it
        system.add_customer(Customer::new("CUS4", "Linus")).unwrap();
        assert_eq!(system.register_customer("Ken").as_str(), "CUS5");

        let grace = system.customer(&CustomerId::from("CUS2")).unwrap();
        assert_eq!(grace.name(), "Grace");
    }

    #[test]
    fn rent_car_decrements_stock_and_records_rental() {
        let mut system = system();
        let customer = system.register_customer("Ada");
        let car_id = CarId::from("C001");

        let rental = system.rent_car(&car_id, &customer, 3).unwrap();

        assert_eq!(stock(&system, "C001"), 4);
        assert_eq!(system.rental_count(), 1);
        assert_eq!(rental.car_id(), &car_id);
        assert_eq!(rental.customer_id(), &customer);
        assert_eq!(rental.days(), 3);
        assert_eq!(system.rental(rental.id()), Some(&rental));
    }

    #[test]
    fn rent_car_out_of_stock_changes_nothing() {
        let mut system = system();
        let customer = system.register_customer("Ada");

        let result = system.rent_car(&CarId::from("C002"), &customer, 2);

        assert_eq!(
            result,
            Err(RentalError::CarUnavailable {
                car_id: CarId::from("C002")
            })
        );
        assert_eq!(stock(&system, "C002"), 0);
        assert_eq!(system.rental_count(), 0);
    }

    #[test]
    fn rent_car_rejects_unknown_parties_and_zero_days() {
        let mut system = system();
        let customer = system.register_customer("Ada");
        let car_id = CarId::from("C001");

        assert!(matches!(
            system.rent_car(&CarId::from("C999"), &customer, 1),
            Err(RentalError::CarNotFound { .. })
        ));
        assert!(matches!(
            system.rent_car(&car_id, &CustomerId::from("CUS404"), 1),
            Err(RentalError::CustomerNotFound { .. })
        ));
        assert_eq!(
            system.rent_car(&car_id, &customer, 0),
            Err(RentalError::InvalidDuration)
        );
        assert_eq!(stock(&system, "C001"), 5);
        assert_eq!(system.rental_count(), 0);
    }

    #[test]
    fn return_car_removes_only_the_matching_rental() {
        let mut system = system();
        let customer = system.register_customer("Ada");
        let car_id = CarId::from("C001");
        let first = system.rent_car(&car_id, &customer, 1).unwrap();
        let second = system.rent_car(&car_id, &customer, 2).unwrap();

        let returned = system.return_car(first.id()).unwrap();

        assert_eq!(returned, first);
        assert_eq!(system.rental_count(), 1);
        assert!(system.rental(first.id()).is_none());
        assert!(system.rental(second.id()).is_some());
    }

    #[test]
    fn return_car_restores_stock() {
        let mut system = system();
        let customer = system.register_customer("Ada");
        let car_id = CarId::from("C001");
        let rental = system.rent_car(&car_id, &customer, 4).unwrap();
        assert_eq!(stock(&system, "C001"), 4);

        system.return_car(rental.id()).unwrap();

        assert_eq!(stock(&system, "C001"), 5);
    }

    #[test]
    fn return_car_with_unknown_id_is_a_no_op() {
        let mut system = system();
        let customer = system.register_customer("Ada");
        system.rent_car(&CarId::from("C001"), &customer, 1).unwrap();

        let result = system.return_car(&RentalId::from("INVALID_ID"));

        assert_eq!(
            result,
            Err(RentalError::RentalNotFound {
                rental_id: RentalId::from("INVALID_ID")
            })
        );
        assert_eq!(system.rental_count(), 1);
        assert_eq!(stock(&system, "C001"), 4);
    }

    #[test]
    fn quote_prices_without_mutating() {
        let system = system();

        let quote = system.quote(&CarId::from("C001"), 3).unwrap();
        assert_eq!(quote.car_name, "Toyota Camry");
        assert_eq!(quote.total_price, 180.0);
        assert_eq!(stock(&system, "C001"), 5);

        assert!(matches!(
            system.quote(&CarId::from("C002"), 3),
            Err(RentalError::CarUnavailable { .. })
        ));
        assert!(matches!(
            system.quote(&CarId::from("nope"), 3),
            Err(RentalError::CarNotFound { .. })
        ));
    }

    #[test]
    fn available_cars_skips_empty_stock() {
        let system = system();

        let ids: Vec<&str> = system
            .available_cars()
            .iter()
            .map(|car| car.id().as_str())
            .collect();
        assert_eq!(ids, ["C001"]);
    }

    #[test]
    fn execute_dispatches_commands() {
        let mut system = system();
        let customer_id = system.register_customer("Ada");

        let rented = system
            .execute(Command::RentCar {
                car_id: CarId::from("C001"),
                customer_id,
                days: 2,
            })
            .unwrap();
        let Outcome::Rented(rental) = rented else {
            panic!("expected a rental, got {rented:?}");
        };

        let returned = system
            .execute(Command::ReturnCar {
                rental_id: rental.id().clone(),
            })
            .unwrap();
        assert_eq!(returned, Outcome::Returned(rental));
        assert_eq!(system.execute(Command::Exit), Ok(Outcome::Exit));
    }
}
