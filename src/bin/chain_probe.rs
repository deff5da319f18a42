//! Command-line probe for the chain optimizer.
//!
//! Run with:
//! `cargo run --bin chain_probe -- 30 35 15 5 10 20 25`
//!
//! Takes the boundary dimensions as arguments, runs the cross-validated
//! optimizer, and for small chains also runs the brute-force baseline.

use std::env;
use std::process;

use chain_dp::{brute_force, optimize, DimensionSequence};

// Keep the demo instant; brute force at the library ceiling takes minutes.
const PROBE_BRUTE_FORCE_STAGES: usize = 12;

fn main() {
    let mut dims = Vec::new();
    for arg in env::args().skip(1) {
        match arg.parse::<i64>() {
            Ok(v) => dims.push(v),
            Err(_) => {
                eprintln!("chain_probe: not an integer: {arg}");
                print_usage();
                process::exit(2);
            }
        }
    }

    let seq = match DimensionSequence::new(&dims) {
        Ok(seq) => seq,
        Err(err) => {
            eprintln!("chain_probe: {err}");
            print_usage();
            process::exit(2);
        }
    };

    let report = optimize(&seq);
    println!("stages: {}", seq.stages());
    println!("dimensions: {:?}", seq.dims());
    println!(
        "memoized (top-down):   cost {} in {:?}",
        report.memoized.cost, report.memoized.elapsed
    );
    println!(
        "tabulated (bottom-up): cost {} in {:?}",
        report.tabulated.cost, report.tabulated.elapsed
    );
    if !report.consistent {
        eprintln!("chain_probe: solvers disagree; this is a defect in the library");
        process::exit(1);
    }

    if seq.stages() <= PROBE_BRUTE_FORCE_STAGES {
        match brute_force(&seq) {
            Ok(cost) => println!("brute force baseline:  cost {cost}"),
            Err(err) => eprintln!("chain_probe: {err}"),
        }
    } else {
        println!(
            "brute force baseline:  skipped ({} stages > {})",
            seq.stages(),
            PROBE_BRUTE_FORCE_STAGES
        );
    }
}

fn print_usage() {
    eprintln!("usage: chain_probe <P0> <P1> ... <PN>   (at least 3 positive integers)");
}
