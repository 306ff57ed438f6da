//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Project layout error
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Solution lookup error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// The input download answered with a non-success status
    #[error("input file download failed with status {0}")]
    DownloadFailed(u16),

    /// The project year could not be read from the root
    #[error("the root directory is not a valid AOC project")]
    InvalidProject(#[source] ProjectError),

    /// Forwarding to the project binary failed
    #[error("Could not run the project binary: {0}")]
    Delegate(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors about the project tree itself
#[derive(Error, Debug)]
pub enum ProjectError {
    /// `init` target already exists
    #[error("{} already exists", .0.display())]
    RootExists(PathBuf),

    /// `make_day` target already exists
    #[error("day {day} is already initialized at {}", .path.display())]
    DayExists { day: u8, path: PathBuf },

    /// An example with this index is already on disk
    #[error("example {} already exists", .0.display())]
    ExampleExists(PathBuf),

    /// The requested example is not on disk
    #[error("no example {index} for day {day}")]
    ExampleNotFound { day: u8, index: u32 },

    /// Every example index up to `u32::MAX` is taken
    #[error("no free example index left for day {day}")]
    ExampleIndexExhausted { day: u8 },

    /// An expected value that would not survive the one-line header
    #[error("expected value must fit on one line, got {0:?}")]
    MultilineExpected(String),

    /// A file named like an example does not follow the naming convention
    #[error("invalid example {}", .0.display())]
    MalformedExample(PathBuf),

    /// An example file lacks its `part:` / `expected:` header
    #[error("invalid example header in {}: {reason}", .path.display())]
    MalformedHeader { path: PathBuf, reason: String },

    /// The year marker could not be found in the marker file
    #[error("no AOC_YEAR marker in {}", .0.display())]
    MissingYear(PathBuf),

    /// A project file could not be read
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A project file could not be written
    #[error("cannot write {}: {source}", .path.display())]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
