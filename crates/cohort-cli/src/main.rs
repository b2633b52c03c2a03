// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
cohort - divide a class of students into groups.

Reads a CSV roster, divides it into groups of the requested size within
the permitted deviation, and prints the grouping to standard output.

Usage:
  cohort --group-size 4 students.csv
  cohort -g 4 -d 2 --seed 42 students.csv
*/

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use cohort_cli::{init_logging, render_division};
use cohort_config::{load_config, validate_config};
use cohort_division::divide;
use cohort_roster_io::read_roster;

/// Divide a class of students into groups
#[derive(Parser, Debug)]
#[command(name = "cohort", version, author, long_about = None)]
struct Args {
    /// Path to file with student data in CSV format
    roster: PathBuf,

    /// Target group size
    #[arg(short = 'g', long)]
    group_size: usize,

    /// Permitted difference between the number of students in a group and
    /// the target group size (defaults from configuration, 1 otherwise)
    #[arg(short = 'd', long)]
    deviation: Option<usize>,

    /// Fix the random seed to make the grouping reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a configuration file (default: ./cohort.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref())
        .context("failed to load configuration")?;
    validate_config(&config)?;

    let level = if args.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    init_logging(level)?;

    let class = read_roster(&args.roster).with_context(|| {
        format!(
            "unable to open or read students file '{}'",
            args.roster.display()
        )
    })?;
    debug!(students = class.len(), "roster loaded");

    let deviation = args.deviation.unwrap_or(config.division.deviation);
    let seed = args.seed.or(config.random.seed);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!(group_size = args.group_size, deviation, ?seed, "dividing");

    let division = divide(&class, args.group_size, deviation, &mut rng)?;

    let stdout = std::io::stdout();
    render_division(&mut stdout.lock(), &division, &mut rng)
        .context("failed to write the group listing")?;

    Ok(())
}
