//! Deterministic test-data generation utility
//!
//! Prints reproducible pseudo-random sample lines, or streams raw bytes,
//! from a seeded linear congruential generator.

use std::process;

mod opts;

use opts::SeqgenOpts;

use seq_cli::run_cli;

const PROGRAM_NAME: &str = "seqgen";

fn main() {
    let opts = SeqgenOpts::parse();

    let config = match opts.config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = run_cli(&config) {
        eprintln!("{PROGRAM_NAME}: {err}");
        process::exit(1);
    }
}
