//! On-disk layout of an aoctools project

use crate::error::ProjectError;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Matches the year marker line written into `aoc/lib.rs`
static YEAR_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*pub\s+const\s+AOC_YEAR\s*:\s*u16\s*=\s*(\d+)\s*;")
        .expect("year marker pattern is valid")
});

/// Matches a day module directory name such as `d07`
static DAY_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^d([0-9]{2})$").expect("day directory pattern is valid"));

/// Paths inside a project root
///
/// Directory structure:
///
/// ```text
/// {root}/aoc/lib.rs              year marker
/// {root}/aoc/days.rs             generated day index
/// {root}/aoc/d{day:02}/          day module
/// {root}/data/d{day:02}/         input.txt and example_NN.txt
/// {root}/tests/aoc/test_d{day:02}.rs
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `d07` for day 7
    pub fn day_name(day: u8) -> String {
        format!("d{:02}", day)
    }

    pub fn module_dir(&self) -> PathBuf {
        self.root.join("aoc")
    }

    /// The file recording the project year
    pub fn marker_path(&self) -> PathBuf {
        self.module_dir().join("lib.rs")
    }

    pub fn day_index_path(&self) -> PathBuf {
        self.module_dir().join("days.rs")
    }

    pub fn day_module_dir(&self, day: u8) -> PathBuf {
        self.module_dir().join(Self::day_name(day))
    }

    pub fn data_root(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn data_dir(&self, day: u8) -> PathBuf {
        self.data_root().join(Self::day_name(day))
    }

    pub fn input_path(&self, day: u8) -> PathBuf {
        self.data_dir(day).join("input.txt")
    }

    pub fn example_path(&self, day: u8, index: u32) -> PathBuf {
        self.data_dir(day).join(format!("example_{:02}.txt", index))
    }

    pub fn tests_dir(&self) -> PathBuf {
        self.root.join("tests")
    }

    pub fn test_module_dir(&self) -> PathBuf {
        self.tests_dir().join("aoc")
    }

    pub fn test_index_path(&self) -> PathBuf {
        self.test_module_dir().join("main.rs")
    }

    pub fn day_test_path(&self, day: u8) -> PathBuf {
        self.test_module_dir()
            .join(format!("test_{}.rs", Self::day_name(day)))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("Cargo.toml")
    }

    /// Read the project year from the marker file
    pub fn read_year(&self) -> Result<u16, ProjectError> {
        let path = self.marker_path();
        let contents = fs::read_to_string(&path).map_err(|source| ProjectError::Unreadable {
            path: path.clone(),
            source,
        })?;
        parse_year_marker(&contents).ok_or(ProjectError::MissingYear(path))
    }

    /// Days that have a module directory, ascending
    pub fn scaffolded_days(&self) -> Result<Vec<u8>, ProjectError> {
        let dir = self.module_dir();
        let entries = fs::read_dir(&dir).map_err(|source| ProjectError::Unreadable {
            path: dir.clone(),
            source,
        })?;

        let mut days = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ProjectError::Unreadable {
                path: dir.clone(),
                source,
            })?;
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name();
            let Some(caps) = name.to_str().and_then(|n| DAY_DIR.captures(n)) else {
                continue;
            };
            if let Ok(day) = caps[1].parse::<u8>()
                && (aoc_solver::FIRST_DAY..=aoc_solver::LAST_DAY).contains(&day)
            {
                days.push(day);
            }
        }
        days.sort_unstable();
        Ok(days)
    }
}

/// Extract the year from the contents of a marker file
pub fn parse_year_marker(contents: &str) -> Option<u16> {
    YEAR_MARKER
        .captures(contents)
        .and_then(|caps| caps[1].parse().ok())
}
