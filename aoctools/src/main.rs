//! aoctools - scaffold, download and run Advent of Code days

use aoctools::SolutionSource;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoctools::main_with(SolutionSource::Cargo)
}
