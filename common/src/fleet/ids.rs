use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Catalog key of a car model, e.g. `C001`.
    CarId
);

string_id!(
    /// Sequential customer key, e.g. `CUS1`.
    CustomerId
);

string_id!(
    /// Rental code handed to the customer: four digits followed by three
    /// uppercase letters, e.g. `4821QXT`.
    RentalId
);

impl CustomerId {
    const PREFIX: &'static str = "CUS";

    /// Builds the `n`-th sequential customer id (`CUS1`, `CUS2`, ...).
    pub fn sequential(n: usize) -> Self {
        Self(format!("{}{n}", Self::PREFIX))
    }
}
