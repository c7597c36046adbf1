use crate::{
    error::{Error, Result},
    services::PathNormalizer,
};
use serde::{Deserialize, Serialize};
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};

/// File names searched for, in order, in each directory
pub const CONFIG_FILE_NAMES: [&str; 2] = [".pathnorm.json", "pathnorm.json"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Working directory to anchor relative paths to.
    /// Relative values are taken relative to the config file's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,

    /// Host separator override, `/` or `\`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    // Directory the config was loaded from (internal, not exposed in JSON)
    #[serde(skip)]
    pub source_dir: Option<String>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        config.source_dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.to_string_lossy().into_owned());

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` looking for a config file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.separator.as_deref() {
            None | Some("/") | Some("\\") => Ok(()),
            Some(other) => Err(Error::ConfigError(format!(
                "Unsupported separator {other:?}, expected \"/\" or \"\\\""
            ))),
        }
    }

    /// The configured separator, or the host's native one
    pub fn host_separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(MAIN_SEPARATOR_STR)
    }

    /// Pick the working directory: the configured one (anchored to the
    /// config file's directory when relative), else `fallback`.
    ///
    /// A relative config directory is itself anchored to `fallback`.
    pub fn resolve_working_directory(&self, fallback: &str) -> String {
        let Some(configured) = self.working_directory.as_deref() else {
            return fallback.to_string();
        };

        let from_fallback = PathNormalizer::with_separator(fallback, self.host_separator());
        let anchor = match self.source_dir.as_deref() {
            Some(source_dir) => from_fallback.absolutize_path(source_dir),
            None => fallback.to_string(),
        };
        PathNormalizer::with_separator(anchor, self.host_separator()).absolutize_path(configured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_serialization_skips_unset_fields() {
        let config = Config {
            working_directory: Some("/srv/app".to_string()),
            separator: None,
            source_dir: Some("/ignored".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"working_directory":"/srv/app"}"#);
    }

    #[test]
    fn test_load_and_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".pathnorm.json");

        let config = Config {
            working_directory: Some("project".to_string()),
            separator: Some("/".to_string()),
            source_dir: None,
        };
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.working_directory.as_deref(), Some("project"));
        assert_eq!(loaded.separator.as_deref(), Some("/"));
        assert_eq!(
            loaded.source_dir,
            Some(temp_dir.path().to_string_lossy().into_owned())
        );
    }

    #[test]
    fn test_load_rejects_bad_separator() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pathnorm.json");
        fs::write(&path, r#"{"separator": ":"}"#).unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pathnorm.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: Failed to parse config"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load_from_file(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("pathnorm.json"), "{}").unwrap();

        let found = Config::find_config_file(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join("pathnorm.json"));
    }

    #[test]
    fn test_find_config_file_prefers_dotfile() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pathnorm.json"), "{}").unwrap();
        fs::write(temp_dir.path().join(".pathnorm.json"), "{}").unwrap();

        let found = Config::find_config_file(temp_dir.path()).unwrap();
        assert_eq!(found, temp_dir.path().join(".pathnorm.json"));
    }

    #[test]
    fn test_resolve_working_directory() {
        let unset = Config::default();
        assert_eq!(unset.resolve_working_directory("/fallback"), "/fallback");

        let absolute = Config {
            working_directory: Some("/srv/app".to_string()),
            separator: Some("/".to_string()),
            source_dir: Some("/etc".to_string()),
        };
        assert_eq!(absolute.resolve_working_directory("/fallback"), "/srv/app");

        let relative = Config {
            working_directory: Some("app".to_string()),
            separator: Some("/".to_string()),
            source_dir: Some("/srv/".to_string()),
        };
        assert_eq!(relative.resolve_working_directory("/fallback"), "/srv/app");

        let detached = Config {
            source_dir: None,
            ..relative
        };
        assert_eq!(detached.resolve_working_directory("/fallback"), "/fallback/app");
    }

    #[test]
    fn test_resolve_working_directory_from_relative_config_dir() {
        let config = Config {
            working_directory: Some("app".to_string()),
            separator: Some("/".to_string()),
            source_dir: Some("conf".to_string()),
        };
        assert_eq!(config.resolve_working_directory("/work"), "/work/conf/app");

        let absolute = Config {
            working_directory: Some("/srv/app".to_string()),
            ..config
        };
        assert_eq!(absolute.resolve_working_directory("/work"), "/srv/app");
    }

    #[test]
    fn test_host_separator_default() {
        assert_eq!(Config::default().host_separator(), MAIN_SEPARATOR_STR);
        let windows = Config {
            separator: Some("\\".to_string()),
            ..Default::default()
        };
        assert_eq!(windows.host_separator(), "\\");
    }
}
