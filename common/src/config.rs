//! # Runtime Configuration
//!
//! The fleet seeded at startup is configuration, not logic: it defaults to
//! three fixed cars and can be replaced from the command line with
//! `ID,BRAND,MODEL,PRICE,STOCK` entries.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::fleet::car::Car;
use crate::fleet::ids::CarId;

const DEFAULT_FLEET: [(&str, &str, &str, f64, u32); 3] = [
    ("C001", "Toyota", "Camry", 60.0, 5),
    ("C002", "Honda", "Accord", 70.0, 4),
    ("C003", "Mahindra", "Thar", 130.0, 8),
];

pub struct Config {
    /// Skips the banner printed at startup.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// `1` drops the banner and section headers, `2` also drops the menu listing.
    pub quiet: u8,
    /// Cars loaded into the catalog at startup.
    pub fleet: Vec<CarSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            fleet: default_fleet(),
        }
    }
}

/// One fleet entry before it becomes a [`Car`].
#[derive(Debug, Clone, PartialEq)]
pub struct CarSpec {
    pub id: CarId,
    pub brand: String,
    pub model: String,
    pub base_price_per_day: f64,
    pub stock: u32,
}

impl From<CarSpec> for Car {
    fn from(spec: CarSpec) -> Self {
        Car::new(
            spec.id,
            spec.brand,
            spec.model,
            spec.base_price_per_day,
            spec.stock,
        )
    }
}

impl FromStr for CarSpec {
    type Err = ConfigError;

    /// Parses `ID,BRAND,MODEL,PRICE,STOCK`, e.g. `C004,Ford,Focus,55,3`.
    ///
    /// Whitespace around fields is ignored. The price must be a finite,
    /// non-negative number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        let &[id, brand, model, price, stock] = fields.as_slice() else {
            return Err(ConfigError::FieldCount {
                input: s.to_string(),
                fields: fields.len(),
            });
        };

        let id = non_empty(id, "car id")?;
        let brand = non_empty(brand, "brand")?;
        let model = non_empty(model, "model")?;

        let base_price_per_day = price
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| ConfigError::InvalidPrice {
                value: price.to_string(),
            })?;

        let stock = stock
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidStock {
                value: stock.to_string(),
            })?;

        Ok(Self {
            id: CarId::from(id),
            brand: brand.to_string(),
            model: model.to_string(),
            base_price_per_day,
            stock,
        })
    }
}

fn non_empty<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyField { field });
    }
    Ok(value)
}

/// The three cars every session starts with unless overridden.
pub fn default_fleet() -> Vec<CarSpec> {
    DEFAULT_FLEET
        .iter()
        .map(|&(id, brand, model, base_price_per_day, stock)| CarSpec {
            id: CarId::from(id),
            brand: brand.to_string(),
            model: model.to_string(),
            base_price_per_day,
            stock,
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
