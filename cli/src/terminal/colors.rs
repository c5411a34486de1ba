use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 200, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const CAR_ID: Color = Color::TrueColor { r: 255, g: 160, b: 120 };
pub const RENTAL_ID: Color = Color::TrueColor { r: 130, g: 230, b: 160 };
pub const PRICE: Color = Color::TrueColor { r: 250, g: 230, b: 120 };
