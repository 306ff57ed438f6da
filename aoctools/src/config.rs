//! Configuration resolution from CLI args

use crate::error::CliError;
use crate::project::ProjectLayout;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Environment variable holding the default session cookie
pub const SESSION_ENV: &str = "AOC_SESSION_COOKIE";

/// Settings for the input downloader
pub struct DownloaderConfig {
    /// Session cookie; overrides the default credential source (zeroized on drop)
    pub session_cookie: Zeroizing<String>,
    /// Alternative site root, used against local mock servers
    pub base_url: Option<String>,
}

impl DownloaderConfig {
    pub fn new(session_cookie: impl Into<String>) -> Self {
        Self {
            session_cookie: Zeroizing::new(session_cookie.into()),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    /// Resolve the session from an explicit value, the environment, or a prompt
    pub fn resolve(explicit: Option<String>, base_url: Option<String>) -> Result<Self, CliError> {
        let session = resolve_session(explicit, std::env::var(SESSION_ENV).ok())?;
        Ok(Self {
            session_cookie: session,
            base_url,
        })
    }
}

/// Pick the session: `--session-cookie` wins over the environment
fn resolve_session(
    explicit: Option<String>,
    from_env: Option<String>,
) -> Result<Zeroizing<String>, CliError> {
    match explicit.or(from_env).filter(|s| !s.trim().is_empty()) {
        Some(s) => Ok(Zeroizing::new(s.trim().to_string())),
        None if std::io::stdin().is_terminal() => prompt_session(&format!(
            "No session cookie given (--session-cookie or {}).",
            SESSION_ENV
        )),
        None => Err(CliError::Config(format!(
            "a session cookie is required: pass --session-cookie or set {}",
            SESSION_ENV
        ))),
    }
}

/// Prompt user for session token
pub fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    println!("{}", reason);
    let s = rpassword::prompt_password("Enter AOC session cookie: ")
        .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?;
    if s.trim().is_empty() {
        return Err(CliError::Config("Session cookie is required.".to_string()));
    }
    Ok(Zeroizing::new(s.trim().to_string()))
}

/// Expand ~ to home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// The year to download for: explicit `--year`, else the project's marker
pub fn resolve_year(explicit: Option<u16>, layout: &ProjectLayout) -> Result<u16, CliError> {
    match explicit {
        Some(year) => Ok(year),
        None => layout.read_year().map_err(CliError::InvalidProject),
    }
}
