// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

use anyhow::{Context, Result, bail};
use clap::Parser;
use polyeval::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bench")]
#[command(version)]
#[command(about = "Generates a random polynomial, saves it, reloads it and times three ways of evaluating it with 64-bit wraparound.", long_about = None)]
struct Args {
    #[arg(short = 'n', long, help = "Degree of the polynomial. Prompted for if missing.")]
    degree: Option<usize>,
    #[arg(short = 'd', long, help = "Number of digits of x. Prompted for if missing.")]
    digits: Option<u32>,
    #[arg(long, default_value = DEFAULT_FILENAME)]
    file: PathBuf,
    #[arg(long, help = "Seed for the evaluation point.")]
    seed: Option<u64>,
    #[arg(long, help = "Benchmark an existing instance file without generating a new one.")]
    load_only: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if !args.load_only {
        let n = match args.degree {
            Some(n) => n,
            None => prompt("Enter the degree of the polynomial (n): ")?,
        };
        let d = match args.digits {
            Some(d) => d,
            None => prompt("Enter the number of digits for coefficients and x (d): ")?,
        };
        if n == 0 || d == 0 {
            bail!("n and d must be positive integers, got n={n} and d={d}");
        }

        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let instance = Instance::generate(n, d, &mut rng);
        instance
            .save(&args.file)
            .with_context(|| format!("failed to write {}", args.file.display()))?;
        info!(n, d, seed = ?args.seed, "generated instance");
        println!("Data saved to {}:", args.file.display());
    }

    let instance = Instance::load(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    let coeffs: Vec<String> = instance.coeffs.iter().map(|c| c.to_string()).collect();
    println!(
        "\nLoaded data from {}:\nCoefficients: [{}]\nx value: {}\n==========================================",
        args.file.display(),
        coeffs.join(", "),
        instance.x()
    );

    for measurement in exec_benchmark(&instance)? {
        println!("{measurement}\n");
    }
    Ok(())
}

/// Asks on stdin until a value parses or input ends.
fn prompt<T: std::str::FromStr>(question: &str) -> Result<T> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{question}");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            bail!("input ended while waiting for an answer to {question:?}");
        };
        let line = line?;
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => eprintln!("{:?} is not a valid number, please try again", line.trim()),
        }
    }
}
