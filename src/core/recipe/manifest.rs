// ─── Recipe Manifest ───
// Reads the user-authored TOML recipe:
//
//   name = "fabric"            # optional launcher profile
//   [[mod]]
//   name = "sodium.jar"
//   url = "https://..."
//   [[resourcepack]] / [[shaderpack]] follow the same shape.

use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use super::model::{Category, Item, Recipe};
use crate::core::error::{LauncherError, LauncherResult};

#[derive(Debug, Default, Deserialize)]
struct RecipeFile {
    #[serde(default)]
    name: String,
    #[serde(default, rename = "mod")]
    mods: Vec<Item>,
    #[serde(default, rename = "resourcepack")]
    resource_packs: Vec<Item>,
    #[serde(default, rename = "shaderpack")]
    shader_packs: Vec<Item>,
}

impl From<RecipeFile> for Recipe {
    fn from(file: RecipeFile) -> Self {
        Recipe::new(Some(file.name))
            .with_items(Category::Mods, file.mods)
            .with_items(Category::ResourcePacks, file.resource_packs)
            .with_items(Category::ShaderPacks, file.shader_packs)
    }
}

impl Recipe {
    /// Read and decode a recipe file. Relative paths are resolved against
    /// the current directory.
    pub async fn load(path: &Path) -> LauncherResult<Self> {
        let full_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        info!("Load recipe: {:?}", full_path);

        let raw = tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|source| {
                error!("Failed load recipe");
                LauncherError::RecipeRead {
                    path: full_path.clone(),
                    source,
                }
            })?;

        let recipe = Self::parse(&raw, &full_path)?;
        info!(
            "Recipe lists {} items (profile: {})",
            recipe.item_count(),
            recipe.profile_name().unwrap_or("<default>")
        );
        Ok(recipe)
    }

    /// Decode recipe text; `path` only labels errors.
    pub fn parse(raw: &str, path: &Path) -> LauncherResult<Self> {
        let file: RecipeFile = toml::from_str(raw).map_err(|source| {
            error!("Failed load recipe");
            LauncherError::RecipeParse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(file.into())
    }
}
