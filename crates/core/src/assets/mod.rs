use std::path::{Path, PathBuf};

use crate::config::AssetConfig;

/// Startup assets of the piece. Both files are optional collaborators: a
/// missing font leaves text on the resident typeface and a missing track
/// turns the music toggle into a no-op, so discovery records presence
/// instead of failing.
#[derive(Debug, Default)]
pub struct AssetStore {
    font: Option<PathBuf>,
    music: Option<PathBuf>,
}

impl AssetStore {
    /// Probes the configured asset directory for the known files.
    pub fn discover(config: &AssetConfig) -> Self {
        Self {
            font: existing(config.dir.join(&config.font_file)),
            music: existing(config.dir.join(&config.music_file)),
        }
    }

    pub fn font(&self) -> Option<&Path> {
        self.font.as_deref()
    }

    pub fn music(&self) -> Option<&Path> {
        self.music.as_deref()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_in(dir: &Path) -> AssetConfig {
        AssetConfig {
            dir: dir.to_path_buf(),
            ..AssetConfig::default()
        }
    }

    #[test]
    fn empty_directory_yields_no_assets() {
        let dir = std::env::temp_dir().join(format!("crescent-assets-none-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let store = AssetStore::discover(&config_in(&dir));
        assert!(store.font().is_none());
        assert!(store.music().is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn present_files_are_picked_up() {
        let dir = std::env::temp_dir().join(format!("crescent-assets-some-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let config = config_in(&dir);
        fs::write(dir.join(&config.music_file), b"not really a wav").unwrap();

        let store = AssetStore::discover(&config);
        assert!(store.font().is_none());
        assert_eq!(store.music(), Some(dir.join(&config.music_file).as_path()));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory_is_tolerated() {
        let dir = std::env::temp_dir().join("crescent-assets-missing-dir-does-not-exist");
        let store = AssetStore::discover(&config_in(&dir));
        assert!(store.font().is_none());
        assert!(store.music().is_none());
    }
}
