use anyhow::Result;
use clap::Parser;

use privacy_lock::cli::Args;
use privacy_lock::commands::{self, utils::init_logging};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    commands::run_command(args)
}
