use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::recipe::Category;

/// Central error type for the installer.
/// Every module returns `Result<T, LauncherError>`.
#[derive(Debug, Error)]
pub enum LauncherError {
    // ── Configuration ───────────────────────────────────
    #[error("Failed to read profile {path:?}: {source}")]
    ProfileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse profile {path:?}: {source}")]
    ProfileParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to read recipe {path:?}: {source}")]
    RecipeRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse recipe {path:?}: {source}")]
    RecipeParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Cannot determine the home directory")]
    HomeDirUnavailable,

    // ── Profile ─────────────────────────────────────────
    #[error("invalid version name: {0}")]
    UnknownProfile(String),

    // ── Filesystem ──────────────────────────────────────
    #[error("Failed to create directory {path:?}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    LocalWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("Download failed for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("Download failed for {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    // ── Aggregated per-item failures ────────────────────
    #[error("{0}")]
    Aggregate(ErrorLog),
}

/// Convenience alias used throughout the crate.
pub type LauncherResult<T> = Result<T, LauncherError>;

/// Coarse classification callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    UnknownProfile,
    DirectoryCreation,
    Network,
    LocalWrite,
    Aggregate,
}

impl LauncherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LauncherError::ProfileRead { .. }
            | LauncherError::ProfileParse { .. }
            | LauncherError::RecipeRead { .. }
            | LauncherError::RecipeParse { .. }
            | LauncherError::HomeDirUnavailable
            | LauncherError::HttpClient(_) => ErrorKind::Config,
            LauncherError::UnknownProfile(_) => ErrorKind::UnknownProfile,
            LauncherError::DirectoryCreation { .. } => ErrorKind::DirectoryCreation,
            LauncherError::Network { .. } | LauncherError::DownloadFailed { .. } => {
                ErrorKind::Network
            }
            LauncherError::LocalWrite { .. } => ErrorKind::LocalWrite,
            LauncherError::Aggregate(_) => ErrorKind::Aggregate,
        }
    }

    /// Per-item failures are isolated; everything else ends the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Network | ErrorKind::LocalWrite)
    }
}

/// A single item that could not be installed.
#[derive(Debug)]
pub struct ItemFailure {
    pub category: Category,
    pub item: String,
    pub url: String,
    pub error: LauncherError,
}

impl fmt::Display for ItemFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: {}", self.category, self.item, self.error)
    }
}

/// Append-only record of per-item failures for one run.
#[derive(Debug, Default)]
pub struct ErrorLog {
    failures: Vec<ItemFailure>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, failure: ItemFailure) {
        self.failures.push(failure);
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemFailure> {
        self.failures.iter()
    }

    /// `Ok` when nothing failed, otherwise the combined report.
    pub fn into_result(self) -> LauncherResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(LauncherError::Aggregate(self))
        }
    }
}

impl fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors occurred:", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "\n{failure}")?;
        }
        Ok(())
    }
}
