pub mod fleet;
pub mod menu;

use clap::{ArgAction, Parser, Subcommand};
use rentr_common::config::{CarSpec, Config, default_fleet};

#[derive(Parser)]
#[command(name = "rentr")]
#[command(about = "A small in-memory car rental tracker.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output (-q drops headers, -qq also drops the menu listing)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug logging from the rental system
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Replace the default fleet, one car per flag: ID,BRAND,MODEL,PRICE,STOCK
    #[arg(long = "car", value_name = "CAR", global = true)]
    pub cars: Vec<CarSpec>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive rental menu (default)
    #[command(alias = "m")]
    Menu,
    /// List the configured fleet
    #[command(alias = "f")]
    Fleet,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let fleet: Vec<CarSpec> = if self.cars.is_empty() {
            default_fleet()
        } else {
            self.cars.clone()
        };

        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            fleet,
        }
    }
}
