//! Headless entry point.

use clap::Parser;
use shearsketch_app::{Cli, run};

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Starting ShearSketch replay of {}", cli.script.display());

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            log::error!("{err}");
            eprintln!("shearsketch: {err}");
            std::process::exit(1);
        }
    }
}
