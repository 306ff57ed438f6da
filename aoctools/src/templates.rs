//! File templates written into generated projects

use crate::project::ProjectLayout;
use std::path::Path;

const MAKEFILE: &str = "\
.PHONY: lint
lint:
\tcargo fmt --check
\tcargo clippy --all-targets -- -D warnings

.PHONY: test
test:
\tcargo test
";

const RUSTFMT_TOML: &str = "\
edition = \"2024\"
max_width = 100
";

const CLIPPY_TOML: &str = "\
msrv = \"1.88\"
";

const GITIGNORE: &str = "\
/target
.env
";

const CARGO_TOML: &str = r#"[package]
name = "aoc-__YEAR__"
version = "0.1.0"
edition = "2024"
publish = false
autobins = false
autotests = false

[lib]
name = "aoc"
path = "aoc/lib.rs"

[[bin]]
name = "aoc"
path = "aoc/main.rs"

[[test]]
name = "solutions"
path = "tests/aoc/main.rs"

[dependencies]
aoctools = { path = __AOCTOOLS__ }

[workspace]
"#;

const LIB_RS: &str = r#"//! Advent of Code __YEAR__

pub const AOC_YEAR: u16 = __YEAR__;

mod days;

pub use days::*;
"#;

const MAIN_RS: &str = r#"use std::process::ExitCode;

fn main() -> ExitCode {
    match aoc::registry() {
        Ok(registry) => aoctools::main_with(aoctools::SolutionSource::Registry(registry)),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
"#;

const TEST_BASE_RS: &str = r#"use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use aoctools::{Answer, PartFn};

pub fn get_path(day: u8) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(format!("d{:02}", day))
        .join("input.txt")
}

pub fn run_aoc_part(day: u8, expected: impl Into<Answer>, method: PartFn) {
    let path = get_path(day);
    let file = File::open(&path)
        .unwrap_or_else(|e| panic!("cannot open {}: {}", path.display(), e));
    let mut input = BufReader::new(file);
    assert_eq!(expected.into(), method(&mut input, false));
}
"#;

const DAY_MOD_RS: &str = r#"mod main;

pub use self::main::{p_1, p_2};
"#;

const DAY_MAIN_RS: &str = r#"use std::io::BufRead;

use aoctools::Answer;

pub fn p_1(_input: &mut dyn BufRead, _debug: bool) -> Answer {
    Answer::Unsolved
}

pub fn p_2(_input: &mut dyn BufRead, _debug: bool) -> Answer {
    Answer::Unsolved
}
"#;

const DAY_TEST_RS: &str = r#"use super::test_base::run_aoc_part;

#[test]
fn test_part_one() {
    run_aoc_part(__DAY__, false, aoc::__DAY_NAME__::p_1);
}

#[test]
fn test_part_two() {
    run_aoc_part(__DAY__, false, aoc::__DAY_NAME__::p_2);
}
"#;

const GENERATED_NOTICE: &str = "\
// Generated by aoctools from the day directories on disk.
// `aoctools init_day` rewrites this file; edits are lost.
";

/// Files written once at the project root: (relative path, contents)
pub fn root_files(year: u16, aoctools: &Path) -> Vec<(&'static str, String)> {
    vec![
        ("Makefile", MAKEFILE.to_string()),
        ("rustfmt.toml", RUSTFMT_TOML.to_string()),
        ("clippy.toml", CLIPPY_TOML.to_string()),
        (".gitignore", GITIGNORE.to_string()),
        ("Cargo.toml", cargo_manifest(year, aoctools)),
    ]
}

/// The project manifest, depending on the aoctools crate at `aoctools`
///
/// The project is its own workspace root so it builds wherever it is created.
pub fn cargo_manifest(year: u16, aoctools: &Path) -> String {
    let path = toml::Value::from(aoctools.to_string_lossy().as_ref());
    CARGO_TOML
        .replace("__YEAR__", &format!("{:04}", year))
        .replace("__AOCTOOLS__", &path.to_string())
}

/// The year marker
pub fn lib_rs(year: u16) -> String {
    LIB_RS.replace("__YEAR__", &format!("{:04}", year))
}

pub fn main_rs() -> &'static str {
    MAIN_RS
}

pub fn test_base_rs() -> &'static str {
    TEST_BASE_RS
}

pub fn day_mod_rs() -> &'static str {
    DAY_MOD_RS
}

pub fn day_main_rs() -> &'static str {
    DAY_MAIN_RS
}

pub fn day_test_rs(day: u8) -> String {
    DAY_TEST_RS
        .replace("__DAY_NAME__", &ProjectLayout::day_name(day))
        .replace("__DAY__", &day.to_string())
}

/// `aoc/days.rs`: module declarations plus the registry table
pub fn day_index_rs(days: &[u8]) -> String {
    let mut out = String::from(GENERATED_NOTICE);

    for day in days {
        let name = ProjectLayout::day_name(*day);
        out.push_str(&format!("\n#[path = \"{name}/mod.rs\"]\npub mod {name};\n"));
    }

    out.push_str("\nconst DAYS: &[(u8, aoctools::PartFn, aoctools::PartFn)] = &[\n");
    for day in days {
        let name = ProjectLayout::day_name(*day);
        out.push_str(&format!("    ({day}, {name}::p_1, {name}::p_2),\n"));
    }
    out.push_str("];\n");

    out.push_str(
        "\npub fn registry() -> Result<aoctools::SolutionRegistry, aoctools::RegistrationError> {\n    \
         Ok(aoctools::SolutionRegistry::builder().register_table(DAYS)?.build())\n}\n",
    );
    out
}

/// `tests/aoc/main.rs`: the harness plus one module per day
pub fn test_index_rs(days: &[u8]) -> String {
    let mut out = String::from(GENERATED_NOTICE);
    out.push_str("\nmod test_base;\n");
    if !days.is_empty() {
        out.push('\n');
    }
    for day in days {
        out.push_str(&format!("mod test_{};\n", ProjectLayout::day_name(*day)));
    }
    out
}
