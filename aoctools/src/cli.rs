//! CLI argument parsing using clap

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code project scaffolding and runner
#[derive(Parser, Debug)]
#[command(name = "aoctools", about = "Scaffold, download and run Advent of Code days", version)]
pub struct Args {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new project directory for a year
    #[command(name = "init")]
    Init {
        /// Project root to create; must not exist yet
        root_path: PathBuf,

        /// Puzzle year (2015 or later)
        #[arg(value_parser = clap::value_parser!(u16).range(2015..))]
        year: u16,

        /// aoctools crate the generated project depends on
        /// (defaults to the sources this binary was built from)
        #[arg(long)]
        aoctools_path: Option<PathBuf>,
    },

    /// Scaffold a day and download its input
    #[command(name = "init_day")]
    InitDay {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=31))]
        day: u8,

        #[arg(long, default_value = ".")]
        root_path: PathBuf,

        /// Year to download for (read from aoc/lib.rs if omitted)
        #[arg(long, value_parser = clap::value_parser!(u16).range(2015..))]
        year: Option<u16>,

        /// Do not create the day's module and test files
        #[arg(long)]
        skip_bootstrap: bool,

        /// Do not download the day's input
        #[arg(long)]
        skip_download: bool,

        /// Session cookie (defaults to AOC_SESSION_COOKIE)
        #[arg(long)]
        session_cookie: Option<String>,

        /// Site root to download from
        #[arg(long, hide = true)]
        base_url: Option<String>,
    },

    /// Write an example fixture for a day
    #[command(name = "init_example")]
    InitExample {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=31))]
        day: u8,

        #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
        part: u8,

        /// Expected answer for the example
        expected: String,

        /// Example index (next free index if omitted)
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        example_number: Option<u32>,

        #[arg(long, default_value = ".")]
        root_path: PathBuf,
    },

    /// Solve one part of a day against its real input
    #[command(name = "run")]
    Run {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=31))]
        day: u8,

        #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
        part: u8,

        #[arg(long, default_value = ".")]
        root_path: PathBuf,

        /// Pass the debug flag to the part function
        #[arg(long)]
        debug: bool,
    },

    /// Run a day's examples and compare with their expected values
    #[command(name = "run_examples")]
    RunExamples {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=31))]
        day: u8,

        /// Run only this example
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        example_number: Option<u32>,

        #[arg(long, default_value = ".")]
        root_path: PathBuf,

        #[arg(long)]
        debug: bool,
    },
}

impl Command {
    /// Arguments that reproduce this command for the project binary
    ///
    /// Only the running commands are ever forwarded. `root_path` is left out
    /// since the delegate passes the resolved root itself; `verbose` is the
    /// global `-v` count.
    pub fn forwarded_args(&self, verbose: u8) -> Vec<String> {
        let mut args = match self {
            Command::Run {
                day, part, debug, ..
            } => {
                let mut args = vec!["run".to_string(), day.to_string(), part.to_string()];
                if *debug {
                    args.push("--debug".to_string());
                }
                args
            }
            Command::RunExamples {
                day,
                example_number,
                debug,
                ..
            } => {
                let mut args = vec!["run_examples".to_string(), day.to_string()];
                if let Some(n) = example_number {
                    args.push(n.to_string());
                }
                if *debug {
                    args.push("--debug".to_string());
                }
                args
            }
            _ => return Vec::new(),
        };
        if verbose > 0 {
            args.push(format!("-{}", "v".repeat(verbose as usize)));
        }
        args
    }
}
