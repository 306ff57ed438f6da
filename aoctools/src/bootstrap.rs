//! Project and day scaffolding

use crate::error::ProjectError;
use crate::examples::{ExampleFile, find_example, next_example_index};
use crate::project::ProjectLayout;
use crate::templates;
use aoc_solver::Part;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The aoctools crate generated projects depend on by default
pub const DEFAULT_AOCTOOLS_PATH: &str = env!("CARGO_MANIFEST_DIR");

/// Initialize a project for the given year
///
/// Fails without touching the filesystem if `root` already exists. The
/// parent directory must exist.
pub fn init(root: &Path, year: u16) -> Result<ProjectLayout, ProjectError> {
    init_with_dependency(root, year, Path::new(DEFAULT_AOCTOOLS_PATH))
}

/// [`init`], with the generated manifest depending on the aoctools crate at `aoctools`
///
/// If populating the new root fails, the root is removed again so the call
/// can be retried.
pub fn init_with_dependency(
    root: &Path,
    year: u16,
    aoctools: &Path,
) -> Result<ProjectLayout, ProjectError> {
    let layout = ProjectLayout::new(root);

    fs::create_dir(root).map_err(|source| match source.kind() {
        io::ErrorKind::AlreadyExists => ProjectError::RootExists(root.to_path_buf()),
        _ => ProjectError::Unwritable {
            path: root.to_path_buf(),
            source,
        },
    })?;
    tracing::debug!(root = %root.display(), year, aoctools = %aoctools.display(), "initializing project");

    populate(&layout, year, aoctools).inspect_err(|e| {
        tracing::debug!(error = %e, "removing partially initialized root");
        let _ = fs::remove_dir_all(root);
    })?;
    Ok(layout)
}

fn populate(layout: &ProjectLayout, year: u16, aoctools: &Path) -> Result<(), ProjectError> {
    for (name, contents) in templates::root_files(year, aoctools) {
        write_file(&layout.root().join(name), &contents)?;
    }

    create_dir(&layout.module_dir())?;
    write_file(&layout.marker_path(), &templates::lib_rs(year))?;
    write_file(&layout.module_dir().join("main.rs"), templates::main_rs())?;
    write_file(&layout.day_index_path(), &templates::day_index_rs(&[]))?;

    create_dir(&layout.data_root())?;

    create_dir(&layout.tests_dir())?;
    create_dir(&layout.test_module_dir())?;
    write_file(
        &layout.test_module_dir().join("test_base.rs"),
        templates::test_base_rs(),
    )?;
    write_file(&layout.test_index_path(), &templates::test_index_rs(&[]))
}

/// Add a day to the project
///
/// Creates the day module (shim + stub), its data directory and its test
/// file, then regenerates the day index files so the new day is linked into
/// the project's registry and test target.
pub fn make_day(root: &Path, day: u8) -> Result<(), ProjectError> {
    let layout = ProjectLayout::new(root);
    let module_dir = layout.day_module_dir(day);

    fs::create_dir(&module_dir).map_err(|source| match source.kind() {
        io::ErrorKind::AlreadyExists => ProjectError::DayExists {
            day,
            path: module_dir.clone(),
        },
        _ => ProjectError::Unwritable {
            path: module_dir.clone(),
            source,
        },
    })?;
    tracing::debug!(day, dir = %module_dir.display(), "scaffolding day");

    write_file(&module_dir.join("mod.rs"), templates::day_mod_rs())?;
    write_file(&module_dir.join("main.rs"), templates::day_main_rs())?;
    create_dir_all(&layout.data_dir(day))?;
    write_file(&layout.day_test_path(day), &templates::day_test_rs(day))?;

    write_day_indexes(&layout)
}

/// Rewrite `aoc/days.rs` and `tests/aoc/main.rs` from the day directories on disk
pub fn write_day_indexes(layout: &ProjectLayout) -> Result<(), ProjectError> {
    let days = layout.scaffolded_days()?;
    tracing::trace!(?days, "regenerating day indexes");

    write_file(&layout.day_index_path(), &templates::day_index_rs(&days))?;
    write_file(&layout.test_index_path(), &templates::test_index_rs(&days))
}

/// Write an example fixture for a day
///
/// When `index` is `None` the next free index is used. An example with the
/// same index is never overwritten, however its file name is padded.
/// Returns the path written.
pub fn make_example(
    root: &Path,
    day: u8,
    part: Part,
    expected: &str,
    index: Option<u32>,
) -> Result<PathBuf, ProjectError> {
    if expected.contains(|c| c == '\n' || c == '\r') {
        return Err(ProjectError::MultilineExpected(expected.to_string()));
    }

    let layout = ProjectLayout::new(root);
    let index = match index {
        Some(index) => index,
        None => next_example_index(&layout, day)?,
    };
    if let Some(existing) = find_example(&layout, day, index)? {
        return Err(ProjectError::ExampleExists(existing));
    }

    create_dir_all(&layout.data_dir(day))?;
    let path = layout.example_path(day, index);
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => ProjectError::ExampleExists(path.clone()),
            _ => ProjectError::Unwritable {
                path: path.clone(),
                source,
            },
        })?;

    file.write_all(ExampleFile::render_header(part, expected).as_bytes())
        .map_err(|source| ProjectError::Unwritable {
            path: path.clone(),
            source,
        })?;
    tracing::debug!(day, index, path = %path.display(), "wrote example");

    Ok(path)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ProjectError> {
    tracing::trace!(path = %path.display(), "writing");
    fs::write(path, contents).map_err(|source| ProjectError::Unwritable {
        path: path.to_path_buf(),
        source,
    })
}

fn create_dir(path: &Path) -> Result<(), ProjectError> {
    fs::create_dir(path).map_err(|source| ProjectError::Unwritable {
        path: path.to_path_buf(),
        source,
    })
}

fn create_dir_all(path: &Path) -> Result<(), ProjectError> {
    fs::create_dir_all(path).map_err(|source| ProjectError::Unwritable {
        path: path.to_path_buf(),
        source,
    })
}
