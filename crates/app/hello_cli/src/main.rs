// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::io::{self, Write};

use clap::Parser;
use cli::{Cli, Commands};

mod cli;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match &args.command {
        Commands::Greet { .. } => {
            let names = args.command.names();
            log::debug!("greeting {} name(s)", names.len());
            write_greetings(&mut io::stdout().lock(), &names)?;
        }
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            println!("hello_core {}", hello_core::version());
        }
    }

    Ok(())
}

fn write_greetings(out: &mut impl Write, names: &[&str]) -> Result<()> {
    for name in names {
        writeln!(out, "{}", hello_core::greet(name))?;
    }
    out.flush()?;
    Ok(())
}
