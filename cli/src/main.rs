mod commands;
mod terminal;

use commands::{CommandLine, Commands, fleet, menu};
use rentr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;
    let cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::menu(&cfg),
        Commands::Fleet => fleet::fleet(&cfg),
    }
}
