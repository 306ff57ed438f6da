//! Advent of Code Solution Library
//!
//! The runtime side of an `aoctools` project: the interface every day's
//! solution implements, the value its part functions return, and the
//! explicit registry a project binary builds from its day modules.
//!
//! # Overview
//!
//! This library provides:
//! - A two-function [`Solution`] interface (`p_1`, `p_2`) over a buffered input stream
//! - [`Answer`], a comparable return value with conversions from common primitives
//! - [`SolutionRegistry`], mapping day numbers (1-31) to linked solutions
//! - [`solve_timed`], which invokes a part and records its duration
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{Answer, Part, SolutionRegistry, solve_timed};
//! use std::io::BufRead;
//!
//! fn p_1(input: &mut dyn BufRead, _debug: bool) -> Answer {
//!     input
//!         .lines()
//!         .map_while(Result::ok)
//!         .filter_map(|line| line.trim().parse::<i64>().ok())
//!         .sum::<i64>()
//!         .into()
//! }
//!
//! fn p_2(_input: &mut dyn BufRead, _debug: bool) -> Answer {
//!     Answer::Unsolved
//! }
//!
//! let registry = SolutionRegistry::builder()
//!     .register_fns(1, p_1, p_2)
//!     .unwrap()
//!     .build();
//!
//! let solution = registry.get(1).unwrap();
//! let result = solve_timed(solution, 1, Part::One, &mut "1\n2\n3".as_bytes(), false);
//! assert_eq!(result.answer, Answer::Int(6));
//! ```

mod answer;
mod error;
mod outcome;
mod registry;
mod solution;

// Re-export public API
pub use answer::Answer;
pub use error::{PartError, RegistrationError, SolverError};
pub use outcome::{SolveResult, solve_timed};
pub use registry::{FIRST_DAY, LAST_DAY, RegistryBuilder, SolutionRegistry};
pub use solution::{FnSolution, Part, PartFn, Solution};
