#![cfg(test)]
use rentr_common::config::default_fleet;
use rentr_common::error::RentalError;
use rentr_common::fleet::car::Car;
use rentr_common::fleet::customer::Customer;
use rentr_common::fleet::ids::{CarId, CustomerId, RentalId};
use rentr_core::command::{Command, Outcome};
use rentr_core::rental_id::RentalIdGenerator;
use rentr_core::system::RentalSystem;

/// The three seeded cars plus an out-of-stock one.
fn seeded_system() -> RentalSystem {
    let mut cars: Vec<Car> = default_fleet().into_iter().map(Car::from).collect();
    cars.push(Car::new("C004", "Ford", "Focus", 55.0, 0));
    RentalSystem::from_cars(cars, RentalIdGenerator::seeded(2024)).unwrap()
}

fn stock(system: &RentalSystem, car_id: &CarId) -> u32 {
    system
        .car(car_id)
        .map(Car::available_in_stock)
        .expect("car missing from catalog")
}

#[test]
fn rent_seeded_camry_for_three_days() {
    let mut system = seeded_system();
    let camry = CarId::from("C001");
    let customer = system.register_customer("Ada");
    assert_eq!(stock(&system, &camry), 5);

    let quote = system.quote(&camry, 3).unwrap();
    assert_eq!(format!("{:.2}", quote.total_price), "180.00");

    let rental = system.rent_car(&camry, &customer, 3).unwrap();

    assert_eq!(stock(&system, &camry), 4);
    assert_eq!(system.rental_count(), 1);
    assert_eq!(rental.car_id(), &camry);
    assert_eq!(rental.customer_id(), &customer);
}

#[test]
fn renting_out_of_stock_car_reports_unavailable() {
    let mut system = seeded_system();
    let focus = CarId::from("C004");
    let customer = system.register_customer("Ada");

    let result = system.rent_car(&focus, &customer, 2);

    assert_eq!(
        result,
        Err(RentalError::CarUnavailable {
            car_id: focus.clone()
        })
    );
    assert_eq!(stock(&system, &focus), 0);
    assert_eq!(system.rental_count(), 0);
}

#[test]
fn rent_then_return_empties_rentals_and_restores_stock() {
    let mut system = seeded_system();
    let accord = CarId::from("C002");
    let customer = system.register_customer("Ada");
    let rental = system.rent_car(&accord, &customer, 2).unwrap();

    let returned = system.return_car(rental.id()).unwrap();

    assert_eq!(returned.id(), rental.id());
    assert_eq!(system.rental_count(), 0);
    assert_eq!(stock(&system, &accord), 4);
}

#[test]
fn return_with_fabricated_id_reports_not_found() {
    let mut system = seeded_system();
    let customer = system.register_customer("Ada");
    let rental = system.rent_car(&CarId::from("C003"), &customer, 1).unwrap();

    let result = system.return_car(&RentalId::from("INVALID_ID"));

    assert!(matches!(result, Err(RentalError::RentalNotFound { .. })));
    assert_eq!(system.rental_count(), 1);
    assert!(system.rental(rental.id()).is_some());
}

#[test]
fn stock_tracks_every_rent_and_return() {
    let mut system = seeded_system();
    let thar = CarId::from("C003");
    let customer = system.register_customer("Ada");

    let rentals: Vec<_> = (1..=8)
        .map(|days| system.rent_car(&thar, &customer, days).unwrap())
        .collect();
    assert_eq!(stock(&system, &thar), 0);
    assert!(matches!(
        system.rent_car(&thar, &customer, 1),
        Err(RentalError::CarUnavailable { .. })
    ));

    for rental in &rentals {
        system.return_car(rental.id()).unwrap();
    }
    assert_eq!(stock(&system, &thar), 8);
    assert_eq!(system.rental_count(), 0);

    // A closed rental cannot be returned twice
    assert!(matches!(
        system.return_car(rentals[0].id()),
        Err(RentalError::RentalNotFound { .. })
    ));
    assert_eq!(stock(&system, &thar), 8);
}

#[test]
fn command_session_for_two_customers() {
    let mut system = seeded_system();
    system.add_customer(Customer::new("VIP1", "Grace")).unwrap();
    let ada = system.register_customer("Ada");
    let grace = CustomerId::from("VIP1");

    let rent = |system: &mut RentalSystem, customer_id: &CustomerId, car: &str| {
        match system.execute(Command::RentCar {
            car_id: CarId::from(car),
            customer_id: customer_id.clone(),
            days: 2,
        }) {
            Ok(Outcome::Rented(rental)) => rental,
            other => panic!("rent failed: {other:?}"),
        }
    };
    let ada_rental = rent(&mut system, &ada, "C001");
    let grace_rental = rent(&mut system, &grace, "C001");
    assert_ne!(ada_rental.id(), grace_rental.id());
    assert_eq!(stock(&system, &CarId::from("C001")), 3);

    let outcome = system
        .execute(Command::ReturnCar {
            rental_id: grace_rental.id().clone(),
        })
        .unwrap();
    let Outcome::Returned(closed) = outcome else {
        panic!("expected a return, got {outcome:?}");
    };
    let who = system.customer(closed.customer_id()).unwrap();
    assert_eq!(who.name(), "Grace");

    assert_eq!(system.rental_count(), 1);
    assert!(system.rental(ada_rental.id()).is_some());
    assert_eq!(system.execute(Command::Exit), Ok(Outcome::Exit));
}
