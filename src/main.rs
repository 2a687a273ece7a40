mod cli;
mod config;
mod utils;

use std::io::{self, BufRead, IsTerminal, Write};

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;

use street_art::{canvas::Canvas, street::Street};

use crate::{
    cli::Cli,
    config::Config,
    utils::{initialize_logging, initialize_panic_handler},
};

fn read_street_line(prompt: &str) -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;
    }
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line)
}

fn run() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let cli = Cli::parse();
    let config = Config::new()?;
    let unknown_tokens = cli.unknown_tokens.unwrap_or(config.street.unknown_tokens);

    let line = match cli.street_line() {
        Some(line) => line,
        None => read_street_line(&config.street.prompt)?,
    };
    let street = Street::parse(&line, unknown_tokens)?;
    info!("Drawing {} elements, {}x{}", street.len(), street.total_width(), street.max_height());

    let mut stdout = io::stdout().lock();
    for line in Canvas::new(&street).lines() {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    if let Err(e) = run() {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
