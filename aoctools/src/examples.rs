//! Example fixtures: discovery and parsing
//!
//! An example file lives at `data/dNN/example_NN.txt` and starts with a
//! three line header:
//!
//! ```text
//! part: 1
//! expected: 42
//!
//! ```
//!
//! Anything after the header is the example's puzzle input.

use crate::error::ProjectError;
use crate::project::ProjectLayout;
use aoc_solver::Part;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static EXAMPLE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^example_([0-9]+)\.txt$").expect("example name pattern is valid")
});

const EXAMPLE_PREFIX: &str = "example_";

/// All example files for a day in numeric index order
///
/// Returns an empty list when the day has no data directory yet. Every entry
/// whose name starts with `example_` must follow the `example_<digits>.txt`
/// convention; anything else is reported as malformed.
pub fn examples_sorted(layout: &ProjectLayout, day: u8) -> Result<Vec<(u32, PathBuf)>, ProjectError> {
    let dir = layout.data_dir(day);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(ProjectError::Unreadable { path: dir, source }),
    };

    let mut examples = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ProjectError::Unreadable {
            path: dir.clone(),
            source,
        })?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !name.starts_with(EXAMPLE_PREFIX) {
            continue;
        }
        examples.push((example_index(&name, &entry.path())?, entry.path()));
    }

    examples.sort();
    tracing::trace!(day, count = examples.len(), "indexed examples");
    Ok(examples)
}

/// Index the next example for a day should get: one past the largest, or 1
pub fn next_example_index(layout: &ProjectLayout, day: u8) -> Result<u32, ProjectError> {
    match examples_sorted(layout, day)?.last() {
        None => Ok(1),
        Some((index, _)) => index
            .checked_add(1)
            .ok_or(ProjectError::ExampleIndexExhausted { day }),
    }
}

/// The file holding example `index` of `day`, whatever its zero padding
///
/// `example_7.txt` and `example_07.txt` both carry index 7.
pub fn find_example(
    layout: &ProjectLayout,
    day: u8,
    index: u32,
) -> Result<Option<PathBuf>, ProjectError> {
    Ok(examples_sorted(layout, day)?
        .into_iter()
        .find(|(i, _)| *i == index)
        .map(|(_, path)| path))
}

fn example_index(name: &str, path: &Path) -> Result<u32, ProjectError> {
    EXAMPLE_NAME
        .captures(name)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| ProjectError::MalformedExample(path.to_path_buf()))
}

/// A parsed example file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleFile {
    pub part: Part,
    pub expected: String,
    /// Input handed to the part function: everything after the header
    pub body: String,
}

impl ExampleFile {
    /// The header written for a new example
    pub fn render_header(part: Part, expected: &str) -> String {
        format!("part: {}\nexpected: {}\n\n", part, expected)
    }

    pub fn read(path: &Path) -> Result<Self, ProjectError> {
        let contents = fs::read_to_string(path).map_err(|source| ProjectError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|reason| ProjectError::MalformedHeader {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn parse(contents: &str) -> Result<Self, String> {
        let mut lines = contents.split_inclusive('\n');

        let part_line = lines.next().ok_or("missing `part:` line")?;
        let part = header_value(part_line, "part")?;
        let part = part
            .parse::<u8>()
            .ok()
            .and_then(|p| Part::try_from(p).ok())
            .ok_or_else(|| format!("part must be 1 or 2, got `{}`", part))?;

        let expected_line = lines.next().ok_or("missing `expected:` line")?;
        let expected = header_value(expected_line, "expected")?.to_string();

        if let Some(separator) = lines.next()
            && !separator.trim().is_empty()
        {
            return Err("the header must end with a blank line".to_string());
        }

        Ok(Self {
            part,
            expected,
            body: lines.collect(),
        })
    }
}

fn header_value<'a>(line: &'a str, key: &str) -> Result<&'a str, String> {
    line.trim()
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix(':'))
        .map(str::trim)
        .ok_or_else(|| format!("expected `{}:` line, got `{}`", key, line.trim_end()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn layout_with_day(temp: &TempDir, day: u8) -> ProjectLayout {
        let layout = ProjectLayout::new(temp.path());
        fs::create_dir_all(layout.data_dir(day)).unwrap();
        layout
    }

    #[test]
    fn test_missing_data_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());

        assert!(examples_sorted(&layout, 4).unwrap().is_empty());
        assert_eq!(next_example_index(&layout, 4).unwrap(), 1);
    }

    #[test]
    fn test_numeric_not_lexical_order() {
        let temp = TempDir::new().unwrap();
        let layout = layout_with_day(&temp, 1);
        for name in ["example_10.txt", "example_2.txt", "example_01.txt", "input.txt"] {
            fs::write(layout.data_dir(1).join(name), "part: 1\nexpected: 0\n\n").unwrap();
        }

        let indices: Vec<u32> = examples_sorted(&layout, 1)
            .unwrap()
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        assert_eq!(indices, vec![1, 2, 10]);
        assert_eq!(next_example_index(&layout, 1).unwrap(), 11);
    }

    #[test]
    fn test_malformed_name_rejected() {
        let temp = TempDir::new().unwrap();
        let layout = layout_with_day(&temp, 2);
        fs::write(layout.data_dir(2).join("example_one.txt"), "").unwrap();

        assert!(matches!(
            examples_sorted(&layout, 2),
            Err(ProjectError::MalformedExample(_))
        ));
    }

    #[test]
    fn test_find_example_ignores_padding() {
        let temp = TempDir::new().unwrap();
        let layout = layout_with_day(&temp, 3);
        fs::write(layout.data_dir(3).join("example_7.txt"), "").unwrap();

        let found = find_example(&layout, 3, 7).unwrap();
        assert_eq!(found, Some(layout.data_dir(3).join("example_7.txt")));
        assert_eq!(find_example(&layout, 3, 70).unwrap(), None);
    }

    #[test]
    fn test_next_index_exhausted() {
        let temp = TempDir::new().unwrap();
        let layout = layout_with_day(&temp, 5);
        fs::write(layout.example_path(5, u32::MAX), "").unwrap();

        assert!(matches!(
            next_example_index(&layout, 5),
            Err(ProjectError::ExampleIndexExhausted { day: 5 })
        ));
    }

    #[test]
    fn test_parse_header_and_body() {
        let example = ExampleFile::parse("part: 2\nexpected: 4512\n\n7,4,9\n\n22 13\n").unwrap();

        assert_eq!(example.part, Part::Two);
        assert_eq!(example.expected, "4512");
        assert_eq!(example.body, "7,4,9\n\n22 13\n");
    }

    #[test]
    fn test_parse_header_only() {
        let example = ExampleFile::parse(&ExampleFile::render_header(Part::One, "42")).unwrap();

        assert_eq!(example.part, Part::One);
        assert_eq!(example.expected, "42");
        assert_eq!(example.body, "");
    }

    #[test]
    fn test_parse_rejects_bad_headers() {
        assert!(ExampleFile::parse("").is_err());
        assert!(ExampleFile::parse("part: 3\nexpected: 1\n\n").is_err());
        assert!(ExampleFile::parse("expected: 1\npart: 1\n\n").is_err());
        assert!(ExampleFile::parse("part: 1\nexpected: 1\ninput\n").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        /// Index order never depends on creation order
        #[test]
        fn prop_sorted_regardless_of_creation_order(
            indices in prop::collection::hash_set(1u32..500, 0..12),
        ) {
            let temp = TempDir::new().unwrap();
            let layout = layout_with_day(&temp, 7);
            for index in &indices {
                fs::write(layout.example_path(7, *index), "").unwrap();
            }

            let found: Vec<u32> = examples_sorted(&layout, 7)
                .unwrap()
                .into_iter()
                .map(|(i, _)| i)
                .collect();

            let mut expected: Vec<u32> = indices.iter().copied().collect();
            expected.sort_unstable();
            prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(&found, &expected);
            prop_assert_eq!(
                next_example_index(&layout, 7).unwrap(),
                expected.last().map_or(1, |max| max + 1)
            );
        }
    }
}
