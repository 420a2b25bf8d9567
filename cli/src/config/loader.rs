//! Simple CLI configuration loader for tablebook
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority, also read from TABLEBOOK_CONFIG)
//! 2. Current working directory: ./tablebook.json or ./.tablebook/routes.json
//! 3. Git repository root: <repo_root>/.tablebook/routes.json
//! 4. XDG config: $XDG_CONFIG_HOME/tablebook/routes.json or ~/.config/tablebook/routes.json
//! 5. Built-in application routes (no files)

use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tablebook_core::{app, HistoryMode, RouterConfig};
use tracing::debug;

/// File name looked up inside configuration directories
const ROUTES_FILE_NAME: &str = "routes.json";

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    BuiltIn,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::BuiltIn => f.write_str("built-in routes"),
        }
    }
}

/// Configuration with its origin
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: RouterConfig,
    pub source: ConfigSource,
}

/// CLI configuration loader
#[derive(Debug, Clone, Default)]
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    history_override: Option<HistoryMode>,
    base_override: Option<String>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set history mode override
    pub fn with_history_override(mut self, history: HistoryMode) -> Self {
        self.history_override = Some(history);
        self
    }

    /// Set base path override
    pub fn with_base_override(mut self, base: String) -> Self {
        self.base_override = Some(base);
        self
    }

    /// Load configuration and apply flag overrides
    pub async fn load(&self) -> Result<LoadedConfig> {
        // Step 1: Find and load base configuration
        let mut loaded = if let Some(override_path) = &self.config_override {
            let path = expand_path(override_path);
            let (config, file) = self.load_from_path(&path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?;
            LoadedConfig {
                config,
                source: ConfigSource::File(file),
            }
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(history) = self.history_override {
            loaded.config.history = history;
        }
        if let Some(base) = &self.base_override {
            loaded.config.base = base.clone();
        }

        debug!(
            "Using {} ({} routes, {} history)",
            loaded.source,
            loaded.config.routes.len(),
            loaded.config.history
        );
        Ok(loaded)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<LoadedConfig> {
        let cwd = std::env::current_dir()?;

        let mut candidates = vec![
            cwd.join("tablebook.json"),
            cwd.join(".tablebook").join(ROUTES_FILE_NAME),
        ];
        if let Some(git_root) = find_git_root(&cwd) {
            candidates.push(git_root.join(".tablebook").join(ROUTES_FILE_NAME));
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("tablebook").join(ROUTES_FILE_NAME));
        }

        for candidate in candidates {
            if candidate.is_file() {
                let config = self.load_file(&candidate).await?;
                return Ok(LoadedConfig {
                    config,
                    source: ConfigSource::File(candidate),
                });
            }
        }

        debug!("No route configuration file found, using built-in routes");
        Ok(LoadedConfig {
            config: app::router_config(),
            source: ConfigSource::BuiltIn,
        })
    }

    /// Load from a file, or from routes.json inside a directory
    async fn load_from_path(&self, path: &Path) -> Result<(RouterConfig, PathBuf)> {
        if path.is_file() {
            Ok((self.load_file(path).await?, path.to_path_buf()))
        } else if path.is_dir() {
            let file = path.join(ROUTES_FILE_NAME);
            if file.is_file() {
                Ok((self.load_file(&file).await?, file))
            } else {
                Err(anyhow!(
                    "No {} found in directory: {}",
                    ROUTES_FILE_NAME,
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RouterConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Expand `~` and environment variables in a user-supplied path
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(_) => path.to_path_buf(),
    }
}

/// Find git repository root
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ROUTES: &str = r#"{
        "history": "hash",
        "routes": [
            { "path": "/", "name": "Home", "view": "Home" },
            { "path": "/reservation", "name": "Reservation", "view": "Reservation" }
        ]
    }"#;

    #[tokio::test]
    async fn test_load_explicit_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("custom.json");
        tokio::fs::write(&path, ROUTES).await.unwrap();

        let loaded = CliConfigLoader::new()
            .with_config_override(path.clone())
            .load()
            .await
            .unwrap();

        assert_eq!(loaded.source, ConfigSource::File(path));
        assert_eq!(loaded.config.history, HistoryMode::Hash);
        assert_eq!(loaded.config.routes.len(), 2);
    }

    #[tokio::test]
    async fn test_load_directory_and_overrides() {
        let temp_dir = tempdir().unwrap();
        tokio::fs::write(temp_dir.path().join(ROUTES_FILE_NAME), ROUTES)
            .await
            .unwrap();

        let loaded = CliConfigLoader::new()
            .with_config_override(temp_dir.path().to_path_buf())
            .with_history_override(HistoryMode::Web)
            .with_base_override("/app".to_string())
            .load()
            .await
            .unwrap();

        assert_eq!(loaded.config.history, HistoryMode::Web);
        assert_eq!(loaded.config.base, "/app");
    }

    #[tokio::test]
    async fn test_missing_override_fails() {
        let temp_dir = tempdir().unwrap();
        let err = CliConfigLoader::new()
            .with_config_override(temp_dir.path().join("missing.json"))
            .load()
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to load config"));

        let err = CliConfigLoader::new()
            .with_config_override(temp_dir.path().to_path_buf())
            .load()
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("No routes.json found"));
    }

    #[tokio::test]
    async fn test_invalid_json_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.json");
        tokio::fs::write(&path, "{ \"routes\": [").await.unwrap();

        let err = CliConfigLoader::new()
            .with_config_override(path)
            .load()
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_find_git_root() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::create_dir(temp_dir.path().join(".git")).unwrap();

        assert_eq!(find_git_root(&nested), Some(temp_dir.path().to_path_buf()));
    }
}
