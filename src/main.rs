//! Binary entrypoint for clangfmt
//!
//! Parses the CLI and forwards to [`clangfmt::run`]; all real work lives
//! in the library.

use clap::Parser;
use clangfmt::cli::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();
    match clangfmt::run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(clangfmt::EXIT_ERROR);
        }
    }
}
