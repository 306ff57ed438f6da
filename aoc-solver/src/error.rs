//! Error types for the solver library

use thiserror::Error;

/// Error type for part numbers outside of 1..=2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Part {0} is out of range (expected 1 or 2)")]
pub struct PartError(pub u8);

/// Error type for solution lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// No solution is registered for the given day
    #[error("No solution registered for day {0}")]
    NotFound(u8),
    /// The day lies outside 1..=31
    #[error("Day {0} is out of range")]
    InvalidDay(u8),
    /// The part lies outside 1..=2
    #[error(transparent)]
    InvalidPart(#[from] PartError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a solution for a day that already has one
    #[error("Duplicate solution registration for day {0}")]
    DuplicateSolution(u8),
    /// The day lies outside 1..=31
    #[error("Cannot register day {0}: out of range")]
    InvalidDay(u8),
}
