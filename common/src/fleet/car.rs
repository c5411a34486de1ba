use crate::error::RentalError;
use crate::fleet::ids::CarId;

/// A car model in the catalog together with the number of units on the lot.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    id: CarId,
    brand: String,
    model: String,
    base_price_per_day: f64,
    available_in_stock: u32,
}

impl Car {
    pub fn new(
        id: impl Into<CarId>,
        brand: impl Into<String>,
        model: impl Into<String>,
        base_price_per_day: f64,
        available_in_stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            base_price_per_day,
            available_in_stock,
        }
    }

    pub fn id(&self) -> &CarId {
        &self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_price_per_day(&self) -> f64 {
        self.base_price_per_day
    }

    pub fn available_in_stock(&self) -> u32 {
        self.available_in_stock
    }

    pub fn is_available(&self) -> bool {
        self.available_in_stock > 0
    }

    /// `"Brand Model"`, as shown to customers.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Flat daily rate times the number of days.
    ///
    /// Zero or negative durations are not rejected here and simply yield a
    /// zero or negative price.
    pub fn calculate_price(&self, days: i64) -> f64 {
        self.base_price_per_day * days as f64
    }

    /// Takes one unit off the lot.
    ///
    /// Fails with [`RentalError::CarUnavailable`] when the stock is already
    /// zero, leaving the counter untouched.
    pub fn rent(&mut self) -> Result<(), RentalError> {
        if self.available_in_stock == 0 {
            return Err(RentalError::CarUnavailable {
                car_id: self.id.clone(),
            });
        }
        self.available_in_stock -= 1;
        Ok(())
    }

    /// Puts one unit back on the lot.
    pub fn return_car(&mut self) {
        self.available_in_stock = self.available_in_stock.saturating_add(1);
    }
}
