//! ecglist-check: CLI tool for checking email addresses against a hash file.

use clap::Parser;
use ecglist::{BlacklistEngine, Classification};
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ecglist-check")]
#[command(version = "0.1.0")]
#[command(about = "Check email addresses against a blacklist hash file", long_about = None)]
struct Cli {
    /// Blacklist hash file
    #[arg(short = 'f', long, env = "ECGLIST_HASH_FILE")]
    hash_file: PathBuf,

    /// Print one JSON object per address
    #[arg(short, long)]
    json: bool,

    /// Addresses to check (read from stdin, one per line, if omitted)
    addresses: Vec<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    address: &'a str,
    result: Option<Classification>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::from(1),
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Check every address, returning whether any of them was listed.
fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let engine = BlacklistEngine::new(&cli.hash_file);
    let mut any_listed = false;

    let mut check_one = |address: &str| -> Result<(), Box<dyn std::error::Error>> {
        let result = engine.check(address)?;
        any_listed |= result.is_some();

        if cli.json {
            println!("{}", serde_json::to_string(&Report { address, result })?);
        } else {
            match result {
                Some(c) => println!("{}\t{}", address, c.description()),
                None => println!("{}\tnot blacklisted", address),
            }
        }
        Ok(())
    };

    if cli.addresses.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            check_one(line)?;
        }
    } else {
        for address in &cli.addresses {
            check_one(address)?;
        }
    }

    log::debug!("Checked against {} records", engine.table().len());
    Ok(any_listed)
}
