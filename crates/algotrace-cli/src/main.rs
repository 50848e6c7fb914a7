//! Algotrace CLI - trace and replay data-structure algorithms

mod cli;
mod presenter;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    let mut app = cli::AlgotraceApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
