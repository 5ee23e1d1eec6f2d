use std::path::PathBuf;

use clap::Parser;

use crate::core::error::LauncherResult;
use crate::core::paths::GamePaths;

/// Install the mods and resource packs listed in a recipe.
#[derive(Debug, Parser)]
#[command(name = "mcm", version, about)]
pub struct Cli {
    /// Recipe file (TOML) listing the items to install.
    #[arg(value_name = "RECIPE")]
    pub recipe: PathBuf,

    /// Game directory used when the recipe names no profile
    /// (default: ~/.minecraft, %APPDATA%\.minecraft on Windows).
    #[arg(long, value_name = "DIR")]
    pub minecraft_dir: Option<PathBuf>,

    /// Launcher profile registry (default: <minecraft-dir>/launcher_profiles.json).
    #[arg(long, value_name = "FILE")]
    pub profiles: Option<PathBuf>,
}

impl Cli {
    /// Build the run's paths, applying any overrides on top of the
    /// platform defaults.
    pub fn game_paths(&self) -> LauncherResult<GamePaths> {
        let mut paths = match &self.minecraft_dir {
            Some(dir) => GamePaths::new(dir),
            None => GamePaths::detect()?,
        };
        if let Some(profiles) = &self.profiles {
            paths = paths.with_profiles_file(profiles);
        }
        Ok(paths)
    }
}
