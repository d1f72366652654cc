use crate::error::LintError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Folders scanned when neither the CLI nor `fn-lint.toml` names any.
pub const DEFAULT_FOLDERS: &[&str] = &["functions", "bin"];

/// Optional per-project config file, looked up at the project root.
pub const CONFIG_FILE: &str = "fn-lint.toml";

/// Contents of `fn-lint.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub folders: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct LinterConfig {
    pub root_dir: PathBuf,
    pub folders: Vec<String>,
}

impl LinterConfig {
    /// Config rooted at `root` scanning the default folders.
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            folders: DEFAULT_FOLDERS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Config rooted at `root`, with folders taken from `fn-lint.toml` when present.
    pub fn load(root: &Path) -> Result<Self, LintError> {
        let mut config = Self::from_root(root);
        if let Some(file) = read_file_config(root)? {
            if let Some(folders) = file.folders {
                config.folders = folders;
            }
        }
        Ok(config)
    }

    /// Replace the folder set. Folders are scanned in the order given.
    pub fn with_folders<I, S>(mut self, folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.folders = folders.into_iter().map(Into::into).collect();
        self
    }

    /// Discover the project root by walking up from `start` to the first
    /// directory holding `fn-lint.toml` or `.git`.
    pub fn discover_from(start: &Path) -> Result<Self, LintError> {
        let mut dir = start.to_path_buf();
        loop {
            if dir.join(CONFIG_FILE).is_file() || dir.join(".git").exists() {
                return Self::load(&dir);
            }
            if !dir.pop() {
                return Err(LintError::RootNotFound {
                    start: start.to_path_buf(),
                });
            }
        }
    }

    /// Discover the project root from the current directory.
    pub fn discover() -> Result<Self, LintError> {
        let cwd = std::env::current_dir().map_err(|e| LintError::Config {
            path: PathBuf::from("."),
            message: e.to_string(),
        })?;
        Self::discover_from(&cwd)
    }
}

fn read_file_config(root: &Path) -> Result<Option<FileConfig>, LintError> {
    let path = root.join(CONFIG_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    let raw = fs::read_to_string(&path).map_err(|e| LintError::Config {
        path: path.clone(),
        message: e.to_string(),
    })?;
    let parsed = toml::from_str(&raw).map_err(|e| LintError::Config {
        path,
        message: e.to_string(),
    })?;
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_root_uses_default_folders() {
        let config = LinterConfig::from_root(Path::new("/repo"));
        assert_eq!(config.folders, vec!["functions", "bin"]);
        assert_eq!(config.root_dir, PathBuf::from("/repo"));
    }

    #[test]
    fn with_folders_replaces_and_keeps_order() {
        let config = LinterConfig::from_root(Path::new("/repo")).with_folders(["bin", "functions", "extra"]);
        assert_eq!(config.folders, vec!["bin", "functions", "extra"]);
    }

    #[test]
    fn load_reads_folders_from_config_file() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "folders = [\"functions\"]\n").unwrap();

        let config = LinterConfig::load(temp.path()).unwrap();
        assert_eq!(config.folders, vec!["functions"]);
    }

    #[test]
    fn load_without_config_file_keeps_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = LinterConfig::load(temp.path()).unwrap();
        assert_eq!(config.folders, vec!["functions", "bin"]);
    }

    #[test]
    fn load_rejects_malformed_config_file() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "folders = \"functions\"\n").unwrap();

        let err = LinterConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, LintError::Config { .. }));
    }

    #[test]
    fn discover_walks_up_to_config_file() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "").unwrap();
        let nested = temp.path().join("tools/fn-lint");
        fs::create_dir_all(&nested).unwrap();

        let config = LinterConfig::discover_from(&nested).unwrap();
        assert_eq!(config.root_dir, temp.path());
    }
}
