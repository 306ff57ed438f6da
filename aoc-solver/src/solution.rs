//! Two-part solution interface

use crate::answer::Answer;
use crate::error::PartError;
use std::fmt;
use std::io::BufRead;

/// Signature shared by every part function
///
/// A part function reads the puzzle input from `input` and may print extra
/// diagnostics when `debug` is set.
pub type PartFn = fn(input: &mut dyn BufRead, debug: bool) -> Answer;

/// One of the two sub-problems of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl TryFrom<u8> for Part {
    type Error = PartError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            other => Err(PartError(other)),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Core trait for a day's solution.
///
/// Each day exposes exactly two part functions. Most projects never
/// implement this by hand: the generated day modules hand their `p_1` and
/// `p_2` functions to [`FnSolution`].
///
/// # Example
///
/// ```
/// use aoc_solver::{Answer, Part, Solution};
/// use std::io::BufRead;
///
/// struct Sum;
///
/// impl Solution for Sum {
///     fn p_1(&self, input: &mut dyn BufRead, _debug: bool) -> Answer {
///         input
///             .lines()
///             .map_while(Result::ok)
///             .filter_map(|l| l.trim().parse::<i64>().ok())
///             .sum::<i64>()
///             .into()
///     }
///
///     fn p_2(&self, _input: &mut dyn BufRead, _debug: bool) -> Answer {
///         Answer::Unsolved
///     }
/// }
///
/// let mut input = "1\n2\n3\n".as_bytes();
/// assert_eq!(Sum.solve(Part::One, &mut input, false), Answer::Int(6));
/// ```
pub trait Solution: Send + Sync {
    fn p_1(&self, input: &mut dyn BufRead, debug: bool) -> Answer;

    fn p_2(&self, input: &mut dyn BufRead, debug: bool) -> Answer;

    /// Dispatch to the part function selected by `part`
    fn solve(&self, part: Part, input: &mut dyn BufRead, debug: bool) -> Answer {
        match part {
            Part::One => self.p_1(input, debug),
            Part::Two => self.p_2(input, debug),
        }
    }
}

/// A solution assembled from two free functions
#[derive(Clone, Copy)]
pub struct FnSolution {
    p_1: PartFn,
    p_2: PartFn,
}

impl FnSolution {
    pub const fn new(p_1: PartFn, p_2: PartFn) -> Self {
        Self { p_1, p_2 }
    }
}

impl fmt::Debug for FnSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSolution").finish_non_exhaustive()
    }
}

impl Solution for FnSolution {
    fn p_1(&self, input: &mut dyn BufRead, debug: bool) -> Answer {
        (self.p_1)(input, debug)
    }

    fn p_2(&self, input: &mut dyn BufRead, debug: bool) -> Answer {
        (self.p_2)(input, debug)
    }
}
