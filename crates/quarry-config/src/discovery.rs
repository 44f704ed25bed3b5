//! Configuration file discovery.
//!
//! Finds `.quarry.toml` files in the working directory and its ancestors, then appends the
//! global `~/.quarry.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".quarry.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global (`~/.quarry.toml`) last.
/// Discovery stops at the first file with `root = true`; in that case the global file is
/// skipped as well. Returns an empty vector if no configuration files are found.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        configs.push(candidate);
        if stop {
            return configs;
        }
    }

    if let Some(global) = global_config_path()
        && global.is_file()
        && !configs.contains(&global)
    {
        configs.push(global);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.quarry.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    /// Drops the global config, which depends on the machine running the tests.
    fn local_only(configs: Vec<PathBuf>) -> Vec<PathBuf> {
        configs.into_iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn test_discover_nothing() {
        let dir = TestDir::new();
        let nested = dir.create_dir("corpus/news/2024");
        assert!(local_only(discover_config_files(&nested)).is_empty());
    }

    #[test]
    fn test_discover_closest_first() {
        let dir = TestDir::new();
        let top = dir.create_config_at_root();
        let mid = dir.create_config("corpus");
        let leaf = dir.create_config("corpus/news");
        let cwd = dir.create_dir("corpus/news/2024");

        let configs = local_only(discover_config_files(&cwd));
        assert_eq!(configs, vec![leaf, mid, top]);
    }

    #[test]
    fn test_discover_in_cwd_itself() {
        let dir = TestDir::new();
        let config = dir.create_config_at_root();
        assert_eq!(local_only(discover_config_files(dir.path())), vec![config]);
    }

    #[test]
    fn test_directory_named_like_config_ignored() {
        let dir = TestDir::new();
        fs::create_dir_all(dir.path().join(CONFIG_FILENAME)).unwrap();
        let cwd = dir.create_dir("docs");
        assert!(local_only(discover_config_files(&cwd)).is_empty());
    }

    #[test]
    fn test_root_config_stops_walk_and_skips_global() {
        let dir = TestDir::new();
        dir.create_config_at_root();
        let root = dir.create_root_config("corpus");
        let child = dir.create_config("corpus/news");
        let cwd = dir.create_dir("corpus/news/today");

        let configs = discover_config_files(&cwd);
        assert_eq!(configs, vec![child, root]);
    }

    #[test]
    fn test_root_false_keeps_walking() {
        let dir = TestDir::new();
        let top = dir.create_config_at_root();
        let mid = dir.create_config_with_content("corpus", "root = false\n");
        let cwd = dir.create_dir("corpus/x");

        assert_eq!(local_only(discover_config_files(&cwd)), vec![mid, top]);
    }

    #[test]
    fn test_unparseable_config_does_not_stop_walk() {
        let dir = TestDir::new();
        let top = dir.create_config_at_root();
        let broken = dir.create_config_with_content("corpus", "root = [\n");

        let configs = local_only(discover_config_files(&dir.path().join("corpus")));
        assert_eq!(configs, vec![broken, top]);
    }

    #[test]
    fn test_global_config_path_named_after_config() {
        let path = global_config_path().unwrap();
        assert!(path.ends_with(CONFIG_FILENAME));
        assert!(is_global_config(&path));
        assert!(!is_global_config(Path::new("/srv/corpus/.quarry.toml")));
    }
}
