//! Forwarding run commands to a project's own binary
//!
//! The installed `aoctools` binary has no solutions linked in. A project's
//! `aoc` binary does, so running a day means building and running that binary
//! through cargo with the same arguments.

use crate::error::CliError;
use crate::project::ProjectLayout;
use std::path::Path;
use std::process::{Command, ExitCode};

/// Binary target name in generated manifests
const PROJECT_BIN: &str = "aoc";

/// Build the `cargo run` invocation for `args` against the project at `layout`
pub fn cargo_command(layout: &ProjectLayout, args: &[String]) -> Command {
    let cargo = std::env::var_os("CARGO").unwrap_or_else(|| "cargo".into());
    let mut cmd = Command::new(cargo);
    cmd.arg("run")
        .arg("--quiet")
        .arg("--manifest-path")
        .arg(layout.manifest_path())
        .arg("--bin")
        .arg(PROJECT_BIN)
        .arg("--")
        .args(args)
        .arg("--root-path")
        .arg(layout.root());
    cmd
}

/// Run `args` through the project binary and exit the way it exited
pub fn forward(layout: &ProjectLayout, args: &[String]) -> Result<ExitCode, CliError> {
    let manifest = layout.manifest_path();
    if !manifest.is_file() {
        return Err(CliError::Delegate(format!(
            "no project manifest at {}",
            manifest.display()
        )));
    }

    let mut cmd = cargo_command(layout, args);
    tracing::debug!(?cmd, "forwarding to project binary");

    let status = cmd
        .status()
        .map_err(|e| CliError::Delegate(format!("failed to spawn cargo: {}", e)))?;
    tracing::debug!(%status, "project binary finished");

    Ok(match status.code() {
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        // Killed by a signal
        None => ExitCode::FAILURE,
    })
}

/// Make a project root absolute so the child's working directory is irrelevant
pub fn absolute_root(root: &Path) -> Result<ProjectLayout, CliError> {
    Ok(ProjectLayout::new(std::path::absolute(root)?))
}
