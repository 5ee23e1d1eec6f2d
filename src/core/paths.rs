use std::path::{Path, PathBuf};

use crate::core::error::{LauncherError, LauncherResult};

const GAME_DIR_NAME: &str = ".minecraft";
const PROFILES_FILE: &str = "launcher_profiles.json";

/// Locations the installer reads from, resolved once at startup and
/// passed down explicitly.
#[derive(Debug, Clone)]
pub struct GamePaths {
    minecraft_dir: PathBuf,
    profiles_file: PathBuf,
}

impl GamePaths {
    /// Paths rooted at an explicit game directory.
    pub fn new(minecraft_dir: impl Into<PathBuf>) -> Self {
        let minecraft_dir = minecraft_dir.into();
        let profiles_file = minecraft_dir.join(PROFILES_FILE);
        Self {
            minecraft_dir,
            profiles_file,
        }
    }

    /// Platform default: `%APPDATA%\.minecraft` on Windows,
    /// `~/.minecraft` everywhere else.
    pub fn detect() -> LauncherResult<Self> {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };

        let base = base.ok_or(LauncherError::HomeDirUnavailable)?;
        Ok(Self::new(base.join(GAME_DIR_NAME)))
    }

    /// Re-root the game directory. A profiles file that was not overridden
    /// follows the new root.
    pub fn with_minecraft_dir(mut self, minecraft_dir: impl Into<PathBuf>) -> Self {
        let follows_root = self.profiles_file == self.minecraft_dir.join(PROFILES_FILE);
        self.minecraft_dir = minecraft_dir.into();
        if follows_root {
            self.profiles_file = self.minecraft_dir.join(PROFILES_FILE);
        }
        self
    }

    pub fn with_profiles_file(mut self, profiles_file: impl Into<PathBuf>) -> Self {
        self.profiles_file = profiles_file.into();
        self
    }

    /// Fallback installation root when the recipe names no usable profile.
    pub fn minecraft_dir(&self) -> &Path {
        &self.minecraft_dir
    }

    pub fn profiles_file(&self) -> &Path {
        &self.profiles_file
    }
}
