//! Count the field operations each hashing entry point costs, as a constraint
//! recorder would see them.
//!
//! `$ cargo run --release --bin constraint_count -- --limbs 10 --json`

use std::collections::BTreeMap;

use clap::Parser;
use poseidon_bls12_377::{ConfigError, CountingOps, Fr, Native, Op, SPONGE_WIDTH, Sponge};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Counter = CountingOps<Native<Fr>>;

#[derive(Debug, Parser)]
#[command(about = "Count field operations per poseidon entry point")]
struct Args {
    /// Number of 64-bit limbs fed to `hash_no_pad` and `hash_or_noop`.
    #[arg(long, default_value_t = 7)]
    limbs: usize,

    /// Print the reports as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    entry_point: &'static str,
    limbs: usize,
    counts: BTreeMap<Op, u64>,
}

fn measure<F>(entry_point: &'static str, limbs: usize, run: F) -> Result<Report, ConfigError>
where
    F: FnOnce(&mut Sponge<'_, Counter>),
{
    let mut ops = Counter::new(Native::new());
    let mut sponge = Sponge::new(&mut ops)?;
    run(&mut sponge);
    debug!(entry_point, limbs, "measured");
    Ok(Report {
        entry_point,
        limbs,
        counts: ops.counts().clone(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    let args = Args::parse();
    let input: Vec<Fr> = (1..=args.limbs as u64).map(Fr::from).collect();

    let reports = [
        measure("permutation", SPONGE_WIDTH, |s| {
            s.permute([Fr::from(0u64); SPONGE_WIDTH]);
        })?,
        measure("hash_no_pad", args.limbs, |s| {
            s.hash_no_pad(&input);
        })?,
        measure("hash_or_noop", args.limbs, |s| {
            s.hash_or_noop(&input);
        })?,
        measure("two_to_one", 2, |s| {
            s.two_to_one(Fr::from(1u64), Fr::from(2u64));
        })?,
        measure("to_vec", 1, |s| {
            let digest = s.hash_no_pad(&input);
            s.ops().reset();
            s.to_vec(digest);
        })?,
    ];

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!("--- {} ({} inputs) ---", report.entry_point, report.limbs);
        for (op, count) in &report.counts {
            println!("{:?}: {}", op, count);
        }
    }
    Ok(())
}
