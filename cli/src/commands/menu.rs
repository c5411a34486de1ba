use std::str::FromStr;

use colored::*;
use rentr_common::config::Config;
use rentr_common::error::RentalError;
use rentr_common::fleet::customer::Customer;
use rentr_common::fleet::ids::{CarId, RentalId};
use rentr_core::command::{Command, Outcome};
use rentr_core::system::RentalSystem;

use crate::commands::fleet;
use crate::mprint;
use crate::terminal::prompt::{LinePrompt, Prompt};
use crate::terminal::{colors, format, print};

const CHOICES: [(&str, &str); 3] = [("1", "Rent a Car"), ("2", "Return a Car"), ("3", "Exit")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Rent,
    Return,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Rent),
            "2" => Ok(Self::Return),
            "3" => Ok(Self::Exit),
            other => Err(format!("invalid menu choice: {other}")),
        }
    }
}

/// What the menu decided after one round of questions.
enum Step {
    Run(Command),
    Skip,
    Quit,
}

pub fn menu(cfg: &Config) -> anyhow::Result<()> {
    let mut system: RentalSystem = fleet::build_system(cfg)?;
    let mut prompt = LinePrompt::stdin();
    run(&mut system, &mut prompt, cfg)
}

/// Drives `system` from `prompt` until the user exits or the input ends.
pub fn run<P: Prompt>(
    system: &mut RentalSystem,
    prompt: &mut P,
    cfg: &Config,
) -> anyhow::Result<()> {
    loop {
        show_choices(cfg.quiet);

        match next_step(system, prompt, cfg)? {
            Step::Run(command) => match system.execute(command) {
                Ok(Outcome::Exit) => break,
                Ok(outcome) => report_outcome(system, &outcome),
                Err(err) => report_error(&err),
            },
            Step::Skip => {}
            Step::Quit => break,
        }
    }

    farewell();
    Ok(())
}

fn next_step<P: Prompt>(
    system: &mut RentalSystem,
    prompt: &mut P,
    cfg: &Config,
) -> anyhow::Result<Step> {
    let Some(answer) = prompt.ask("Enter your choice:")? else {
        return Ok(Step::Quit);
    };

    match answer.parse::<MenuChoice>() {
        Ok(MenuChoice::Rent) => rent_step(system, prompt, cfg),
        Ok(MenuChoice::Return) => return_step(prompt, cfg),
        Ok(MenuChoice::Exit) => Ok(Step::Run(Command::Exit)),
        Err(_) => {
            rentr_common::warn!("Invalid choice. Please enter a valid option.");
            Ok(Step::Skip)
        }
    }
}

fn rent_step<P: Prompt>(
    system: &mut RentalSystem,
    prompt: &mut P,
    cfg: &Config,
) -> anyhow::Result<Step> {
    print::header("rent a car", cfg.quiet);

    let Some(name) = prompt.ask("Enter your name:")? else {
        return Ok(Step::Quit);
    };
    if name.is_empty() {
        rentr_common::warn!("A customer name is required.");
        return Ok(Step::Skip);
    }

    let available = system.available_cars();
    if available.is_empty() {
        rentr_common::warn!("No cars are available for rent right now.");
        return Ok(Step::Skip);
    }
    print::status("Available Cars:");
    for car in available {
        print::status(format::car_line(car));
    }
    mprint!();

    let Some(car_id) = prompt.ask("Enter the Car ID you want to rent:")? else {
        return Ok(Step::Quit);
    };
    let Some(days) = prompt.ask("Enter the number of days for rental:")? else {
        return Ok(Step::Quit);
    };
    let days: u32 = match days.parse::<u32>() {
        Ok(days) if days > 0 => days,
        _ => {
            rentr_common::warn!("Rental days must be a positive whole number.");
            return Ok(Step::Skip);
        }
    };

    let customer_id = system.register_customer(name.as_str());
    let car_id = CarId::from(car_id);
    let Ok(quote) = system.quote(&car_id, days) else {
        rentr_common::warn!("Invalid car selection or the car is not available for rent.");
        return Ok(Step::Skip);
    };

    print::header("rental information", cfg.quiet);
    print::key_values(&[
        ("Customer ID", customer_id.as_str().normal()),
        ("Customer Name", name.as_str().normal()),
        ("Car", quote.car_name.as_str().normal()),
        ("Rental Days", days.to_string().normal()),
        ("Total Price", format::price(quote.total_price).color(colors::PRICE)),
    ]);
    mprint!();

    let Some(confirm) = prompt.ask("Confirm rental (Y/N):")? else {
        return Ok(Step::Quit);
    };
    if !confirm.eq_ignore_ascii_case("y") {
        rentr_common::info!("Rental canceled.");
        return Ok(Step::Skip);
    }

    Ok(Step::Run(Command::RentCar {
        car_id,
        customer_id,
        days,
    }))
}

fn return_step<P: Prompt>(prompt: &mut P, cfg: &Config) -> anyhow::Result<Step> {
    print::header("return a car", cfg.quiet);

    let Some(rental_id) = prompt.ask("Enter the rental ID of the car you rented:")? else {
        return Ok(Step::Quit);
    };
    if rental_id.is_empty() {
        rentr_common::warn!("A rental ID is required.");
        return Ok(Step::Skip);
    }

    Ok(Step::Run(Command::ReturnCar {
        rental_id: RentalId::from(rental_id),
    }))
}

fn show_choices(q_level: u8) {
    if q_level > 1 {
        return;
    }

    mprint!();
    print::header("car rental system", q_level);
    for (key, label) in CHOICES {
        print::status(format!("{}. {}", key.color(colors::ACCENT), label));
    }
}

fn report_outcome(system: &RentalSystem, outcome: &Outcome) {
    match outcome {
        Outcome::Rented(rental) => {
            rentr_common::success!("Car rented successfully.");
            print::key_values(&[(
                "Rental ID",
                rental.id().as_str().color(colors::RENTAL_ID).bold(),
            )]);
        }
        Outcome::Returned(rental) => {
            let name: &str = system
                .customer(rental.customer_id())
                .map(Customer::name)
                .unwrap_or("an unknown customer");
            rentr_common::success!("Car is returned successfully by {name}");
        }
        Outcome::Exit => {}
    }
}

fn report_error(err: &RentalError) {
    match err {
        RentalError::RentalNotFound { .. } => {
            rentr_common::warn!("Car was not rented or rental information is missing.")
        }
        RentalError::CarUnavailable { .. } => {
            rentr_common::warn!("Car is not available for rent.")
        }
        other => rentr_common::error!("{other}"),
    }
}

fn farewell() {
    mprint!();
    print::summary("Thank you for using the Car Rental System!");
}
