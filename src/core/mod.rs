// ─── mcm Core ───
// Recipe-driven installer for Minecraft mods and resource packs.
//
// Architecture:
//   core/
//     paths/       Game directory + profile registry location
//     profile/     launcher_profiles.json model + loader
//     recipe/      TOML recipe model + loader
//     resolver/    Profile name → installation root
//     downloader/  Fetcher trait + streaming HTTP fetcher
//     install/     Per-category skip-or-fetch loop + run report
//     state/       Run-wide wiring (paths + installer)

pub mod downloader;
pub mod error;
pub mod http;
pub mod install;
pub mod paths;
pub mod profile;
pub mod recipe;
pub mod resolver;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
