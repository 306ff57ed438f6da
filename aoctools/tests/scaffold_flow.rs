//! End-to-end flows over a scratch project root

use aoctools::cli::Args;
use aoctools::error::{CliError, ProjectError};
use aoctools::project::ProjectLayout;
use aoctools::{Answer, Part, SolutionRegistry, SolutionSource, bootstrap, execute, runner};
use clap::Parser;
use std::fs;
use std::io::BufRead;
use std::path::Path;
use std::process::ExitCode;
use tempfile::TempDir;

fn command(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("aoctools").chain(args.iter().copied())).unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn increases(input: &mut dyn BufRead, _debug: bool) -> Answer {
    let depths: Vec<i64> = input
        .lines()
        .map_while(Result::ok)
        .filter_map(|line| line.trim().parse().ok())
        .collect();
    depths.windows(2).filter(|w| w[1] > w[0]).count().into()
}

fn unsolved(_input: &mut dyn BufRead, _debug: bool) -> Answer {
    Answer::Unsolved
}

fn registry() -> SolutionRegistry {
    SolutionRegistry::builder()
        .register_fns(1, increases, unsolved)
        .unwrap()
        .build()
}

#[test]
fn scenario_init_day_and_examples() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");

    bootstrap::init(&root, 2023).unwrap();
    let lib = fs::read_to_string(root.join("aoc/lib.rs")).unwrap();
    assert!(lib.contains("pub const AOC_YEAR: u16 = 2023;"));

    bootstrap::make_day(&root, 1).unwrap();
    let stub = fs::read_to_string(root.join("aoc/d01/main.rs")).unwrap();
    assert_eq!(stub.matches("Answer::Unsolved").count(), 2);
    assert!(root.join("tests/aoc/test_d01.rs").is_file());

    let first = bootstrap::make_example(&root, 1, Part::One, "42", None).unwrap();
    assert_eq!(first, root.join("data/d01/example_01.txt"));
    assert_eq!(fs::read_to_string(&first).unwrap(), "part: 1\nexpected: 42\n\n");

    let second = bootstrap::make_example(&root, 1, Part::One, "42", None).unwrap();
    assert_eq!(second, root.join("data/d01/example_02.txt"));
}

#[test]
fn every_day_scaffolds() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    bootstrap::init(&root, 2015).unwrap();
    let layout = ProjectLayout::new(&root);

    for day in 1..=31 {
        bootstrap::make_day(&root, day).unwrap();
    }

    assert_eq!(layout.scaffolded_days().unwrap(), (1..=31).collect::<Vec<_>>());
    let index = fs::read_to_string(layout.day_index_path()).unwrap();
    assert_eq!(index.matches("pub mod d").count(), 31);
    let tests = fs::read_to_string(layout.test_index_path()).unwrap();
    assert!(tests.contains("mod test_d31;"));
}

#[test]
fn init_refuses_existing_root() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    bootstrap::init(&root, 2023).unwrap();
    let before = fs::read_to_string(root.join("aoc/lib.rs")).unwrap();

    let result = execute(
        &command(&["init", path_arg(&root), "2024"]),
        &SolutionSource::Cargo,
    );

    assert!(matches!(result, Err(CliError::Project(ProjectError::RootExists(_)))));
    assert_eq!(fs::read_to_string(root.join("aoc/lib.rs")).unwrap(), before);
}

#[test]
fn run_examples_with_linked_registry() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    bootstrap::init(&root, 2021).unwrap();
    bootstrap::make_day(&root, 1).unwrap();

    let example = bootstrap::make_example(&root, 1, Part::One, "7", None).unwrap();
    fs::OpenOptions::new()
        .append(true)
        .open(&example)
        .and_then(|mut f| {
            use std::io::Write;
            f.write_all(b"199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n")
        })
        .unwrap();
    bootstrap::make_example(&root, 1, Part::Two, "5", None).unwrap();

    let layout = ProjectLayout::new(&root);
    let outcomes = runner::run_examples(&registry(), &layout, 1, false, None).unwrap();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].passed());
    assert!(!outcomes[1].passed());

    let source = SolutionSource::Registry(registry());
    let only_first = execute(
        &command(&["run_examples", "1", "1", "--root-path", path_arg(&root)]),
        &source,
    )
    .unwrap();
    assert_eq!(only_first, ExitCode::SUCCESS);

    let all = execute(
        &command(&["run_examples", "1", "--root-path", path_arg(&root)]),
        &source,
    )
    .unwrap();
    assert_eq!(all, ExitCode::FAILURE);
}

#[test]
fn run_against_downloaded_input() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/2021/day/1/input")
        .match_header("cookie", "session=abc123")
        .with_status(200)
        .with_body("1\n2\n1\n3\n")
        .expect(1)
        .create();

    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    bootstrap::init(&root, 2021).unwrap();

    let code = execute(
        &command(&[
            "init_day",
            "1",
            "--root-path",
            path_arg(&root),
            "--session-cookie",
            "abc123",
            "--base-url",
            &server.url(),
        ]),
        &SolutionSource::Cargo,
    )
    .unwrap();

    mock.assert();
    assert_eq!(code, ExitCode::SUCCESS);
    assert!(root.join("aoc/d01/main.rs").is_file());

    let layout = ProjectLayout::new(&root);
    assert_eq!(fs::read_to_string(layout.input_path(1)).unwrap(), "1\n2\n1\n3\n");

    let result = runner::run(&registry(), &layout, 1, Part::One, false).unwrap();
    assert_eq!(result.answer, Answer::Int(2));
}

#[test]
fn failed_download_is_reported() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/2019/day/2/input")
        .with_status(404)
        .create();

    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    bootstrap::init(&root, 2019).unwrap();

    let result = execute(
        &command(&[
            "init_day",
            "2",
            "--root-path",
            path_arg(&root),
            "--session-cookie",
            "abc",
            "--base-url",
            &server.url(),
        ]),
        &SolutionSource::Cargo,
    );

    assert!(matches!(result, Err(CliError::DownloadFailed(404))));
    assert!(!ProjectLayout::new(&root).input_path(2).exists());
}

#[test]
fn missing_year_marker_is_reported() {
    let temp = TempDir::new().unwrap();

    let result = execute(
        &command(&[
            "init_day",
            "3",
            "--skip-bootstrap",
            "--root-path",
            path_arg(temp.path()),
            "--session-cookie",
            "abc",
        ]),
        &SolutionSource::Cargo,
    );

    let err = result.unwrap_err();
    assert!(matches!(err, CliError::InvalidProject(_)));
    assert_eq!(err.to_string(), "the root directory is not a valid AOC project");
}

#[test]
fn no_subcommand_succeeds() {
    let code = execute(&command(&[]), &SolutionSource::Cargo).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
}

#[test]
fn init_with_aoctools_path() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    let vendored = temp.path().join("aoctools-src");

    let code = execute(
        &command(&[
            "init",
            path_arg(&root),
            "2022",
            "--aoctools-path",
            path_arg(&vendored),
        ]),
        &SolutionSource::Cargo,
    )
    .unwrap();

    assert_eq!(code, ExitCode::SUCCESS);
    let manifest: toml::Table = fs::read_to_string(root.join("Cargo.toml"))
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(
        manifest["dependencies"]["aoctools"]["path"].as_str(),
        vendored.to_str()
    );
}
