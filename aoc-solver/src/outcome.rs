//! Timed invocation of a part function

use crate::answer::Answer;
use crate::solution::{Part, Solution};
use chrono::{DateTime, TimeDelta, Utc};
use std::io::BufRead;

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The day that was solved
    pub day: u8,
    /// The part that was solved
    pub part: Part,
    /// What the part function returned
    pub answer: Answer,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Invoke one part of `solution` and record how long it took
pub fn solve_timed(
    solution: &dyn Solution,
    day: u8,
    part: Part,
    input: &mut dyn BufRead,
    debug: bool,
) -> SolveResult {
    let solve_start = Utc::now();
    let answer = solution.solve(part, input, debug);
    let solve_end = Utc::now();

    SolveResult {
        day,
        part,
        answer,
        solve_start,
        solve_end,
    }
}
