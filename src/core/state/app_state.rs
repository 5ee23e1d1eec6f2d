use crate::core::downloader::{Fetcher, HttpFetcher};
use crate::core::error::LauncherResult;
use crate::core::install::Installer;
use crate::core::paths::GamePaths;

/// Everything one run needs, built once at startup.
pub struct AppState<F: Fetcher = HttpFetcher> {
    pub paths: GamePaths,
    pub installer: Installer<F>,
}

impl AppState<HttpFetcher> {
    pub fn new(paths: GamePaths) -> LauncherResult<Self> {
        Ok(Self::with_fetcher(paths, HttpFetcher::new()?))
    }
}

impl<F: Fetcher> AppState<F> {
    pub fn with_fetcher(paths: GamePaths, fetcher: F) -> Self {
        Self {
            paths,
            installer: Installer::new(fetcher),
        }
    }
}
