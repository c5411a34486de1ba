use crate::terminal::colors;
use colored::*;
use rentr_common::fleet::car::Car;

pub type Detail = (String, ColoredString);

/// `$180.00`
pub fn price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// `C001 - Toyota Camry`, the way cars are offered in the rent menu.
pub fn car_line(car: &Car) -> String {
    format!(
        "{} {} {}",
        car.id().as_str().color(colors::CAR_ID),
        "-".color(colors::SEPARATOR),
        car.display_name().color(colors::TEXT_DEFAULT)
    )
}

pub fn car_to_details(car: &Car) -> Vec<Detail> {
    let stock: ColoredString = match car.available_in_stock() {
        0 => "none left".red(),
        n => n.to_string().normal(),
    };
    vec![
        (String::from("ID"), car.id().as_str().color(colors::CAR_ID)),
        (
            String::from("Rate"),
            format!("{}/day", price(car.base_price_per_day())).color(colors::PRICE),
        ),
        (String::from("Stock"), stock),
    ]
}
