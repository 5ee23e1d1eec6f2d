use std::path::Path;

use tracing::{info, warn};

use crate::core::downloader::Fetcher;
use crate::core::error::LauncherResult;
use crate::core::install::InstallReport;
use crate::core::profile::ProfileStore;
use crate::core::recipe::Recipe;
use crate::core::resolver::resolve_root;
use crate::core::state::AppState;

/// Install everything a recipe lists.
///
/// Profile, recipe and root resolution failures abort before any download.
/// Per-item failures are collected and returned together once every
/// category has been attempted.
pub async fn install_recipe<F: Fetcher>(
    state: &AppState<F>,
    recipe_path: &Path,
) -> LauncherResult<InstallReport> {
    info!("Start mcm");

    let registry = ProfileStore::new(state.paths.profiles_file()).load().await?;
    let recipe = Recipe::load(recipe_path).await?;
    let root = resolve_root(recipe.profile_name(), &registry, state.paths.minecraft_dir())?;
    info!("Installation root: {:?}", root);

    let report = state.installer.install_recipe(&root, &recipe).await?;

    if report.errors.is_empty() {
        info!(
            "Done: {} installed, {} already present",
            report.installed_count(),
            report.skipped_count()
        );
    } else {
        warn!(
            "Done with errors: {} installed, {} already present, {} failed",
            report.installed_count(),
            report.skipped_count(),
            report.failed_count()
        );
    }

    report.finish()
}
