//! Advent of Code project scaffolding and runner
//!
//! `aoctools` creates a project tree for one puzzle year, adds days and
//! example fixtures to it, downloads each day's personalized input, and runs
//! a day's part functions against the real input or the examples.
//!
//! A generated project links its own days into a [`SolutionRegistry`] and its
//! `aoc` binary hands that registry to [`main_with`]. The installed
//! `aoctools` binary has no solutions of its own and forwards `run` and
//! `run_examples` to the project binary through cargo.
//!
//! # Example
//!
//! ```no_run
//! use aoctools::{Answer, SolutionRegistry, SolutionSource};
//! use std::io::BufRead;
//!
//! fn p_1(_input: &mut dyn BufRead, _debug: bool) -> Answer {
//!     Answer::Unsolved
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     let registry = SolutionRegistry::builder()
//!         .register_fns(1, p_1, p_1)
//!         .unwrap()
//!         .build();
//!     aoctools::main_with(SolutionSource::Registry(registry))
//! }
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod delegate;
pub mod downloader;
pub mod error;
pub mod examples;
pub mod logging;
pub mod output;
pub mod project;
pub mod runner;
mod templates;

pub use aoc_solver::{
    Answer, FnSolution, Part, PartFn, RegistrationError, RegistryBuilder, Solution,
    SolutionRegistry, SolveResult, SolverError,
};

use clap::{CommandFactory, Parser};
use cli::{Args, Command};
use config::{DownloaderConfig, expand_tilde};
use error::CliError;
use output::OutputFormatter;
use project::ProjectLayout;
use std::process::ExitCode;

/// Where `run` and `run_examples` find the day's solution
pub enum SolutionSource {
    /// Solutions linked into the calling binary
    Registry(SolutionRegistry),
    /// Build and run the project's own binary through cargo
    Cargo,
}

/// Parse the process arguments and execute the command
pub fn main_with(source: SolutionSource) -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    logging::init(args.verbose);

    match execute(&args, &source) {
        Ok(code) => code,
        // Expected outcomes of `init_day`, reported without the error prefix
        Err(e @ (CliError::InvalidProject(_) | CliError::DownloadFailed(_))) => {
            tracing::debug!(error = ?e, "init_day failed");
            println!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Execute parsed arguments; without a subcommand, print help
pub fn execute(args: &Args, source: &SolutionSource) -> Result<ExitCode, CliError> {
    let Some(command) = &args.command else {
        Args::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Command::Init {
            root_path,
            year,
            aoctools_path,
        } => {
            let root = expand_tilde(root_path);
            let layout = match aoctools_path {
                Some(path) => bootstrap::init_with_dependency(
                    &root,
                    *year,
                    &std::path::absolute(expand_tilde(path))?,
                )?,
                None => bootstrap::init(&root, *year)?,
            };
            println!("Initialized {} for {}", layout.root().display(), year);
            Ok(ExitCode::SUCCESS)
        }

        Command::InitDay {
            day,
            root_path,
            year,
            skip_bootstrap,
            skip_download,
            session_cookie,
            base_url,
        } => {
            let layout = ProjectLayout::new(expand_tilde(root_path));

            if !skip_bootstrap {
                bootstrap::make_day(layout.root(), *day)?;
                println!("Initialized day {}", day);
            }
            if *skip_download {
                return Ok(ExitCode::SUCCESS);
            }

            let year = config::resolve_year(*year, &layout)?;
            let config = DownloaderConfig::resolve(session_cookie.clone(), base_url.clone())?;
            let status = downloader::download(&layout, &config, year, *day)?;
            if !status.is_success() {
                return Err(CliError::DownloadFailed(status.as_u16()));
            }
            println!("Downloaded input for {} day {}", year, day);
            Ok(ExitCode::SUCCESS)
        }

        Command::InitExample {
            day,
            part,
            expected,
            example_number,
            root_path,
        } => {
            let part = Part::try_from(*part).map_err(SolverError::from)?;
            let path = bootstrap::make_example(
                &expand_tilde(root_path),
                *day,
                part,
                expected,
                *example_number,
            )?;
            println!("Wrote {}", path.display());
            Ok(ExitCode::SUCCESS)
        }

        Command::Run {
            day,
            part,
            root_path,
            debug,
        } => {
            let registry = match source {
                SolutionSource::Registry(registry) => registry,
                SolutionSource::Cargo => return forward(args, command, root_path),
            };

            let part = Part::try_from(*part).map_err(SolverError::from)?;
            let layout = ProjectLayout::new(expand_tilde(root_path));
            let result = runner::run(registry, &layout, *day, part, *debug)?;
            OutputFormatter::new().print_result(&result);
            Ok(ExitCode::SUCCESS)
        }

        Command::RunExamples {
            day,
            example_number,
            root_path,
            debug,
        } => {
            let registry = match source {
                SolutionSource::Registry(registry) => registry,
                SolutionSource::Cargo => return forward(args, command, root_path),
            };

            let layout = ProjectLayout::new(expand_tilde(root_path));
            let outcomes = runner::run_examples(registry, &layout, *day, *debug, *example_number)?;
            if outcomes.is_empty() {
                println!("No examples for day {}", day);
                return Ok(ExitCode::SUCCESS);
            }

            let formatter = OutputFormatter::new();
            for outcome in &outcomes {
                formatter.print_example(outcome);
            }
            formatter.print_summary(&outcomes);

            if outcomes.iter().all(|o| o.passed()) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn forward(
    args: &Args,
    command: &Command,
    root_path: &std::path::Path,
) -> Result<ExitCode, CliError> {
    let layout = delegate::absolute_root(&expand_tilde(root_path))?;
    delegate::forward(&layout, &command.forwarded_args(args.verbose))
}
