use anyhow::Context;
use colored::*;
use rentr_common::config::Config;
use rentr_common::fleet::car::Car;
use rentr_core::rental_id::RentalIdGenerator;
use rentr_core::system::RentalSystem;

use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn fleet(cfg: &Config) -> anyhow::Result<()> {
    let system: RentalSystem = build_system(cfg)?;
    let cars: Vec<&Car> = system.cars();

    print::header("fleet", cfg.quiet);
    for (idx, car) in cars.iter().enumerate() {
        print::tree(idx, &car.display_name(), &format::car_to_details(car));
        if idx + 1 != cars.len() {
            mprint!();
        }
    }

    let units: u32 = cars.iter().map(|car| car.available_in_stock()).sum();
    let summary: String = format!(
        "{} models, {} units on the lot",
        cars.len().to_string().bold().green(),
        units.to_string().bold().yellow()
    );
    print::summary(&format!("{}", summary.color(colors::TEXT_DEFAULT)));
    Ok(())
}

/// Seeds a fresh rental system from the configured fleet.
pub fn build_system(cfg: &Config) -> anyhow::Result<RentalSystem> {
    let cars = cfg.fleet.iter().cloned().map(Car::from);
    RentalSystem::from_cars(cars, RentalIdGenerator::new()).context("invalid fleet configuration")
}
