//! CLI for verifying a substring matching program

use std::{ffi::OsString, path::PathBuf, process};

use anyhow::Context;
use clap::Parser;
use maze_match_tools::{
    fixture::Fixture,
    verifier::{ProcessMatcherRunner, Verifier, VerifyError},
};

/// Check a matching program against a naive substring search
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Fixture file with text and pattern line pairs
    #[arg(long, default_value_os_t = default_fixture())]
    fixture: PathBuf,

    /// Matching program to test
    #[arg(long, default_value_os_t = default_program())]
    program: PathBuf,

    /// Extra arguments passed to the matching program
    #[arg(last = true)]
    program_args: Vec<OsString>,
}

fn default_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scripts/matching_test_cases.txt")
}

fn default_program() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target/release/matching")
}

/// Run all fixture cases, print the first failure
fn main() -> anyhow::Result<()> {
    maze_match_tools::init_logging();
    let args = Args::parse();

    let fixture = Fixture::open(&args.fixture)
        .with_context(|| format!("Could not open fixture {}", args.fixture.display()))?;
    let runner = ProcessMatcherRunner::new(&args.program).args(args.program_args);

    match Verifier::new(runner).run(fixture) {
        Ok(_) => {
            println!("All tests passed.");
            Ok(())
        }
        Err(VerifyError::Mismatch(mismatch)) => {
            println!("{}", mismatch);
            process::exit(1);
        }
        Err(err) => Err(err)
            .with_context(|| format!("Could not verify {}", args.program.display())),
    }
}
