//! Puzzle input download into the project tree

use crate::config::DownloaderConfig;
use crate::error::{CliError, ProjectError};
use crate::project::ProjectLayout;
use aoc_http_client::{AocClient, StatusCode};
use std::fs;

/// Download the input for (year, day) into `data/dNN/input.txt`
///
/// The file is only created or overwritten on a 2xx answer. The status is
/// returned either way; transport errors are propagated.
pub fn download(
    layout: &ProjectLayout,
    config: &DownloaderConfig,
    year: u16,
    day: u8,
) -> Result<StatusCode, CliError> {
    let client = build_client(config)?;
    let response = client.fetch_input(year, day, &config.session_cookie)?;

    if let Some(body) = response.body {
        let dir = layout.data_dir(day);
        fs::create_dir_all(&dir).map_err(|source| ProjectError::Unwritable {
            path: dir.clone(),
            source,
        })?;

        let path = layout.input_path(day);
        fs::write(&path, body).map_err(|source| ProjectError::Unwritable {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "saved puzzle input");
    }

    Ok(response.status)
}

fn build_client(config: &DownloaderConfig) -> Result<AocClient, CliError> {
    let builder = AocClient::builder();
    let builder = match &config.base_url {
        Some(url) => builder.base_url(url.as_str())?,
        None => builder,
    };
    Ok(builder.build()?)
}
