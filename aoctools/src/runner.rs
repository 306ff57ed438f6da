//! Runs a day's linked solution against its real input or its examples

use crate::error::{CliError, ProjectError};
use crate::examples::{ExampleFile, examples_sorted, find_example};
use crate::project::ProjectLayout;
use aoc_solver::{Answer, Part, SolutionRegistry, SolveResult, solve_timed};
use chrono::TimeDelta;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Result of running one example fixture
#[derive(Debug, Clone)]
pub struct ExampleOutcome {
    pub index: u32,
    pub path: PathBuf,
    pub part: Part,
    pub expected: String,
    pub answer: Answer,
    pub duration: TimeDelta,
}

impl ExampleOutcome {
    pub fn passed(&self) -> bool {
        self.answer.matches(&self.expected)
    }
}

/// Solve one part of `day` against `data/dNN/input.txt`
pub fn run(
    registry: &SolutionRegistry,
    layout: &ProjectLayout,
    day: u8,
    part: Part,
    debug: bool,
) -> Result<SolveResult, CliError> {
    let solution = registry.get(day)?;

    let path = layout.input_path(day);
    let file = File::open(&path).map_err(|source| ProjectError::Unreadable {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(day, %part, input = %path.display(), "running");

    let mut input = BufReader::new(file);
    Ok(solve_timed(solution, day, part, &mut input, debug))
}

/// Run one example (`example_number` given) or every example of `day`
///
/// Each example's body is handed to the part named in its header and the
/// answer is compared with the header's expected value. Outcomes come back in
/// ascending index order.
pub fn run_examples(
    registry: &SolutionRegistry,
    layout: &ProjectLayout,
    day: u8,
    debug: bool,
    example_number: Option<u32>,
) -> Result<Vec<ExampleOutcome>, CliError> {
    let solution = registry.get(day)?;

    let selected: Vec<(u32, PathBuf)> = match example_number {
        Some(index) => match find_example(layout, day, index)? {
            Some(path) => vec![(index, path)],
            None => return Err(ProjectError::ExampleNotFound { day, index }.into()),
        },
        None => examples_sorted(layout, day)?,
    };

    let mut outcomes = Vec::with_capacity(selected.len());
    for (index, path) in selected {
        let example = ExampleFile::read(&path)?;
        tracing::debug!(day, index, part = %example.part, "running example");

        let result = solve_timed(
            solution,
            day,
            example.part,
            &mut example.body.as_bytes(),
            debug,
        );
        outcomes.push(ExampleOutcome {
            index,
            path,
            part: example.part,
            expected: example.expected,
            duration: result.duration(),
            answer: result.answer,
        });
    }
    Ok(outcomes)
}
