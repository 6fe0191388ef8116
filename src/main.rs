use clap::Parser;
use colored::*;

mod checks;
mod cli;
mod error;
mod ui;

use checks::ProbeRunner;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        println!("{} {:?}", "DEBUG:".yellow(), cli);
    }

    if cli.list {
        for (index, check) in checks::all().iter().enumerate() {
            println!("[{}] {}", index + 1, check.title);
        }
        return;
    }

    let runner = ProbeRunner::new(cli.debug);
    if let Err(e) = runner.run() {
        eprintln!("{} {}", "[!] Probe aborted:".red().bold(), e);
        std::process::exit(1);
    }
}
