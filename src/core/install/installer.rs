use std::path::Path;

use tracing::{error, info};

use super::report::{CategoryReport, InstallReport};
use crate::core::downloader::{Fetcher, HttpFetcher};
use crate::core::error::{ErrorLog, ItemFailure, LauncherError, LauncherResult};
use crate::core::recipe::{Category, Item, Recipe};

/// Installs recipe items into category directories under a root,
/// one item at a time.
pub struct Installer<F: Fetcher = HttpFetcher> {
    fetcher: F,
}

impl<F: Fetcher> Installer<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Install every category of `recipe` under `root`.
    ///
    /// Per-item failures land in the report's error log. A category
    /// directory that cannot be created stops the run.
    pub async fn install_recipe(
        &self,
        root: &Path,
        recipe: &Recipe,
    ) -> LauncherResult<InstallReport> {
        let mut report = InstallReport::new(root.to_path_buf());

        for (category, items) in recipe.categories() {
            if category.is_optional() && items.is_empty() {
                continue;
            }
            let category_report = self
                .install_category(root, category, items, &mut report.errors)
                .await?;
            report.categories.push(category_report);
        }

        Ok(report)
    }

    /// Ensure `<root>/<category>` exists, then fetch each missing item.
    ///
    /// Items whose destination already exists are skipped and never
    /// overwritten. A failed item is appended to `errors` and the loop
    /// moves on.
    pub async fn install_category(
        &self,
        root: &Path,
        category: Category,
        items: &[Item],
        errors: &mut ErrorLog,
    ) -> LauncherResult<CategoryReport> {
        let category_dir = root.join(category.dir_name());
        info!("Start install {} to: {:?}", category, category_dir);

        if !category_dir.exists() {
            info!("Create {} directory", category);
            tokio::fs::create_dir_all(&category_dir)
                .await
                .map_err(|source| {
                    error!("Failed create {} directory", category);
                    LauncherError::DirectoryCreation {
                        path: category_dir.clone(),
                        source,
                    }
                })?;
        }

        let mut report = CategoryReport::new(category, category_dir.clone());

        for item in items {
            let dest = category_dir.join(&item.name);
            if dest.exists() {
                info!("Already installed: {}", item.name);
                report.skipped.push(item.name.clone());
                continue;
            }

            info!("Start install: {}", item.name);
            match self.fetcher.fetch(&dest, &item.url).await {
                Ok(bytes) => {
                    info!("Install to: {:?} ({} bytes)", dest, bytes);
                    report.installed.push(item.name.clone());
                }
                Err(err) => {
                    error!("Failed install {}: {}", item.name, err);
                    report.failed.push(item.name.clone());
                    errors.push(ItemFailure {
                        category,
                        item: item.name.clone(),
                        url: item.url.clone(),
                        error: err,
                    });
                }
            }
        }

        Ok(report)
    }
}
