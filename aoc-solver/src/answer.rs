//! The value a part function hands back

use std::fmt;

/// Answer produced by a part function
///
/// Puzzle answers are almost always integers or short strings, but the
/// generated stubs return nothing until they are filled in, and test
/// placeholders use `false`. All of those compare through this one type.
///
/// # Example
///
/// ```
/// use aoc_solver::Answer;
///
/// assert_eq!(Answer::from(42u32), Answer::Int(42));
/// assert!(Answer::from(42u32).matches("42"));
/// assert!(!Answer::Unsolved.matches(""));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Answer {
    /// The part function has not been implemented yet
    #[default]
    Unsolved,
    Bool(bool),
    Int(i128),
    Text(String),
}

impl Answer {
    /// Whether this answer equals an expected value written in an example file
    ///
    /// The comparison is textual: the answer's display form against the
    /// trimmed expectation. `Unsolved` never matches.
    pub fn matches(&self, expected: &str) -> bool {
        match self {
            Answer::Unsolved => false,
            other => other.to_string() == expected.trim(),
        }
    }

    pub fn is_unsolved(&self) -> bool {
        matches!(self, Answer::Unsolved)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Unsolved => f.write_str("<unsolved>"),
            Answer::Bool(b) => write!(f, "{}", b),
            Answer::Int(n) => write!(f, "{}", n),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Answer {
                fn from(value: $ty) -> Self {
                    Answer::Int(value as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Answer::Bool(value)
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<()> for Answer {
    fn from(_: ()) -> Self {
        Answer::Unsolved
    }
}

impl<T: Into<Answer>> From<Option<T>> for Answer {
    fn from(value: Option<T>) -> Self {
        value.map_or(Answer::Unsolved, Into::into)
    }
}
