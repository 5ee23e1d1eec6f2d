use std::collections::HashMap;

use serde::Deserialize;

/// One launcher profile as stored in `launcher_profiles.json`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Installation directory; empty means "use the default game dir".
    #[serde(default, alias = "installationDirectory")]
    pub game_dir: String,
    #[serde(default)]
    pub last_version_id: String,
}

/// Name → profile mapping, read once and never mutated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRegistry {
    #[serde(default)]
    profiles: HashMap<String, Profile>,
}

impl ProfileRegistry {
    pub fn from_profiles(profiles: impl IntoIterator<Item = (String, Profile)>) -> Self {
        Self {
            profiles: profiles.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Stored directory for `name`, `None` when the name is not registered.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(|p| p.game_dir.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
