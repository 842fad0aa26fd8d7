//! Oreo front-end CLI
//!
//! Entry point for the `oreo` binary. Parses CLI arguments, installs the
//! logger and delegates to the Driver. This is the only place that prints
//! a diagnostic and exits.

use clap::Parser as ClapParser;
use oreo_cli::{Cli, Driver};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let driver = Driver::from_cli(&cli);
    match driver.run(&cli.command) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
