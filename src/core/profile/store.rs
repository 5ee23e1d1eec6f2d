use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::model::ProfileRegistry;
use crate::core::error::{LauncherError, LauncherResult};

/// Reads the launcher's profile registry from disk.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> LauncherResult<ProfileRegistry> {
        info!("Load profile: {:?}", self.path);

        let json = tokio::fs::read_to_string(&self.path).await.map_err(|source| {
            error!("Failed open profile: {:?}", self.path);
            LauncherError::ProfileRead {
                path: self.path.clone(),
                source,
            }
        })?;

        let registry: ProfileRegistry = serde_json::from_str(&json).map_err(|source| {
            error!("Failed read profile: {:?}", self.path);
            LauncherError::ProfileParse {
                path: self.path.clone(),
                source,
            }
        })?;

        info!("Loaded {} profiles", registry.len());
        Ok(registry)
    }
}
