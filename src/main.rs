use std::io;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use wcag_tally::cli::commands::{self, Invocation};
use wcag_tally::{config, logging};

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let command = match commands::parse(std::env::args_os()) {
        Invocation::Run(command) => command,
        Invocation::Message(msg) => {
            println!("{msg}");
            return Ok(());
        }
    };

    let (config, source) = config::load().wrap_err("could not load configuration")?;
    tracing::debug!(%source, store = %config.store_path.display(), "configuration loaded");

    commands::run(command, &config.store_path, &mut io::stdout().lock())
}
