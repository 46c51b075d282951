use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use toolshed::SearchOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub search: SearchConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub limit: usize,
    pub fuzzy: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { limit: 10, fuzzy: true }
    }
}

impl SearchConfig {
    /// Search options for a query; `exact` disables fuzzy matching
    pub fn options(&self, limit: Option<usize>, exact: bool) -> SearchOptions {
        SearchOptions {
            fuzzy: self.fuzzy && !exact,
            limit: Some(limit.unwrap_or(self.limit)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub show_keywords: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_keywords: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            search: SearchConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let (config, failures) = Self::load_first(&Self::fallback_paths());
        for failure in &failures {
            log::warn!("{}", failure);
        }
        Ok(config)
    }

    /// Candidate locations: ~/.config/<project>/<project>.yml, then ./<project>.yml
    fn fallback_paths() -> Vec<PathBuf> {
        let project_name = env!("CARGO_PKG_NAME");
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(project_name).join(format!("{}.yml", project_name)));
        }
        paths.push(PathBuf::from(format!("{}.yml", project_name)));
        paths
    }

    /// First candidate that exists and parses, plus a message per candidate that failed
    fn load_first(candidates: &[PathBuf]) -> (Self, Vec<String>) {
        let mut failures = Vec::new();
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return (config, failures),
                Err(e) => failures.push(format!("Failed to load config from {}: {:#}", path.display(), e)),
            }
        }

        log::info!("No usable config file found, using defaults");
        (Self::default(), failures)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.search.limit, 10);
        assert!(config.search.fuzzy);
        assert!(config.display.color);
        assert!(!config.display.show_keywords);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("toolshed.yml");
        fs::write(&path, "search:\n  limit: 3\ndisplay:\n  color: false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.search.limit, 3);
        assert!(config.search.fuzzy);
        assert!(!config.display.color);
        assert_eq!(config.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yml");
        fs::write(&path, "search: [not, a, map]\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_broken_fallback_is_reported() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.yml");
        let good = dir.path().join("good.yml");
        fs::write(&broken, "search: [not, a, map]\n").unwrap();
        fs::write(&good, "search:\n  limit: 4\n").unwrap();

        let (config, failures) = Config::load_first(&[broken.clone(), good]);
        assert_eq!(config.search.limit, 4);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("Failed to load config from"));
        assert!(failures[0].contains(&broken.display().to_string()));
    }

    #[test]
    fn test_only_broken_fallback_uses_defaults() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("toolshed.yml");
        fs::write(&broken, "display: nope\n").unwrap();

        let (config, failures) = Config::load_first(&[dir.path().join("absent.yml"), broken]);
        assert_eq!(config.search.limit, SearchConfig::default().limit);
        assert_eq!(failures.len(), 1);
    }

    #[test]
    fn test_search_options() {
        let search = SearchConfig::default();
        assert_eq!(
            search.options(None, false),
            SearchOptions {
                fuzzy: true,
                limit: Some(10)
            }
        );
        assert_eq!(
            search.options(Some(2), true),
            SearchOptions {
                fuzzy: false,
                limit: Some(2)
            }
        );
    }
}
