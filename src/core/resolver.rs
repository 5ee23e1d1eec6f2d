use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::profile::ProfileRegistry;

/// Pick the installation root for a run.
///
/// Precedence, first match wins:
/// 1. no profile name → `default_root`
/// 2. name not registered → `UnknownProfile`
/// 3. registered with an empty directory → `default_root`
/// 4. the profile's directory
///
/// The name is validated before its directory is consulted, so an unknown
/// name is rejected even though the fallback root would have been usable.
pub fn resolve_root(
    profile_name: Option<&str>,
    registry: &ProfileRegistry,
    default_root: &Path,
) -> LauncherResult<PathBuf> {
    let name = match profile_name {
        Some(name) if !name.is_empty() => name,
        _ => {
            debug!("No profile requested, using {:?}", default_root);
            return Ok(default_root.to_path_buf());
        }
    };

    let Some(dir) = registry.lookup(name) else {
        error!("Failed find the version name: {}", name);
        return Err(LauncherError::UnknownProfile(name.to_string()));
    };

    if dir.is_empty() {
        debug!("Profile '{}' has no game directory, using {:?}", name, default_root);
        return Ok(default_root.to_path_buf());
    }

    Ok(PathBuf::from(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::Profile;

    fn registry() -> ProfileRegistry {
        ProfileRegistry::from_profiles([
            (
                "blank".to_string(),
                Profile {
                    game_dir: String::new(),
                    last_version_id: "1.20.4".into(),
                },
            ),
            (
                "modded".to_string(),
                Profile {
                    game_dir: "/srv/modded".into(),
                    last_version_id: "1.21.1".into(),
                },
            ),
        ])
    }

    #[test]
    fn empty_name_uses_default_root() {
        let default = Path::new("/home/steve/.minecraft");
        assert_eq!(resolve_root(None, &registry(), default).unwrap(), default);
        assert_eq!(resolve_root(Some(""), &registry(), default).unwrap(), default);
        assert_eq!(
            resolve_root(None, &ProfileRegistry::default(), default).unwrap(),
            default
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = resolve_root(Some("ghost"), &registry(), Path::new("/d")).unwrap_err();
        match err {
            LauncherError::UnknownProfile(name) => assert_eq!(name, "ghost"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn registered_profile_without_directory_falls_back() {
        let root = resolve_root(Some("blank"), &registry(), Path::new("/d")).unwrap();
        assert_eq!(root, Path::new("/d"));
    }

    #[test]
    fn registered_profile_directory_wins() {
        let root = resolve_root(Some("modded"), &registry(), Path::new("/d")).unwrap();
        assert_eq!(root, Path::new("/srv/modded"));
    }
}
