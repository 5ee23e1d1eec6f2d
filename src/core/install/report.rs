use std::path::PathBuf;

use crate::core::error::{ErrorLog, LauncherError, LauncherResult};
use crate::core::recipe::Category;

/// Outcome of one category. Item names are kept in processing order.
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub category: Category,
    pub dir: PathBuf,
    pub installed: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

impl CategoryReport {
    pub fn new(category: Category, dir: PathBuf) -> Self {
        Self {
            category,
            dir,
            installed: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
        }
    }
}

/// Outcome of a whole run.
#[derive(Debug)]
pub struct InstallReport {
    pub root: PathBuf,
    pub categories: Vec<CategoryReport>,
    pub errors: ErrorLog,
}

impl InstallReport {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            categories: Vec::new(),
            errors: ErrorLog::new(),
        }
    }

    pub fn installed_count(&self) -> usize {
        self.categories.iter().map(|c| c.installed.len()).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.categories.iter().map(|c| c.skipped.len()).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.errors.len()
    }

    /// A run with any per-item failure is a failed run, even if other
    /// items landed.
    pub fn finish(self) -> LauncherResult<Self> {
        if self.errors.is_empty() {
            Ok(self)
        } else {
            Err(LauncherError::Aggregate(self.errors))
        }
    }
}
