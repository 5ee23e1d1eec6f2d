use serde::{Deserialize, Serialize};

/// Item groups a recipe can install. Each maps to a subdirectory of the
/// installation root.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mods,
    ResourcePacks,
    ShaderPacks,
}

impl Category {
    /// Installation order.
    pub const ALL: [Category; 3] = [
        Category::Mods,
        Category::ResourcePacks,
        Category::ShaderPacks,
    ];

    /// Directory name under the installation root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Mods => "mods",
            Category::ResourcePacks => "resourcepacks",
            Category::ShaderPacks => "shaderpacks",
        }
    }

    /// Optional categories only get a directory when the recipe lists
    /// something for them.
    pub fn is_optional(self) -> bool {
        matches!(self, Category::ShaderPacks)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One downloadable file. `name` doubles as the destination file name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub url: String,
}

impl Item {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Decoded recipe: which profile to install into and what to fetch.
#[derive(Debug, Clone, Default)]
pub struct Recipe {
    profile_name: Option<String>,
    mods: Vec<Item>,
    resource_packs: Vec<Item>,
    shader_packs: Vec<Item>,
}

impl Recipe {
    pub fn new(profile_name: Option<String>) -> Self {
        Self {
            profile_name: profile_name.filter(|n| !n.is_empty()),
            ..Self::default()
        }
    }

    pub fn with_items(mut self, category: Category, items: Vec<Item>) -> Self {
        *self.items_mut(category) = items;
        self
    }

    /// Profile to install into; `None` when the recipe leaves it blank.
    pub fn profile_name(&self) -> Option<&str> {
        self.profile_name.as_deref()
    }

    pub fn items(&self, category: Category) -> &[Item] {
        match category {
            Category::Mods => &self.mods,
            Category::ResourcePacks => &self.resource_packs,
            Category::ShaderPacks => &self.shader_packs,
        }
    }

    fn items_mut(&mut self, category: Category) -> &mut Vec<Item> {
        match category {
            Category::Mods => &mut self.mods,
            Category::ResourcePacks => &mut self.resource_packs,
            Category::ShaderPacks => &mut self.shader_packs,
        }
    }

    /// Every category with its items, in installation order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, &[Item])> {
        Category::ALL.into_iter().map(|c| (c, self.items(c)))
    }

    pub fn item_count(&self) -> usize {
        self.categories().map(|(_, items)| items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_name_is_none() {
        assert_eq!(Recipe::new(Some(String::new())).profile_name(), None);
        assert_eq!(Recipe::new(None).profile_name(), None);
        assert_eq!(
            Recipe::new(Some("fabric".into())).profile_name(),
            Some("fabric")
        );
    }

    #[test]
    fn categories_follow_installation_order() {
        let recipe = Recipe::new(None)
            .with_items(Category::ResourcePacks, vec![Item::new("r.zip", "u")])
            .with_items(Category::Mods, vec![Item::new("m.jar", "u")]);

        let order: Vec<Category> = recipe.categories().map(|(c, _)| c).collect();

        assert_eq!(
            order,
            vec![
                Category::Mods,
                Category::ResourcePacks,
                Category::ShaderPacks
            ]
        );
        assert_eq!(recipe.item_count(), 2);
    }
}
