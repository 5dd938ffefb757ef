// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, CzError, Result};
use std::path::{Path, PathBuf};

use super::schema::CzConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["cz.toml", ".cz.toml", ".config/cz.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = find_in_dir(&current) {
            return Some(found);
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        if let Some(found) = find_in_dir(&home) {
            return Some(found);
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let cz_config = config_dir.join("cz").join("config.toml");
        if cz_config.exists() {
            return Some(cz_config);
        }
    }

    None
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CzConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CzConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CzConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CzError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CzError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CzConfig> {
    let config: CzConfig = toml::from_str(content).map_err(|e| {
        CzError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &CzConfig) -> Result<()> {
    if config.format.max_line_width == 0 {
        return Err(CzError::Config(ConfigError::InvalidValue {
            key: "format.max_line_width".to_string(),
            message: "must be greater than zero".to_string(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.format.max_line_width, 100);
        assert!(config.ui.color);
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[format]
max_line_width = 72

[ui]
color = false
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.format.max_line_width, 72);
        assert!(!config.ui.color);
    }

    #[test]
    fn test_parse_zero_width_rejected() {
        let result = parse_config("[format]\nmax_line_width = 0\n");
        assert!(matches!(
            result,
            Err(CzError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_config("[format\nmax_line_width = ");
        assert!(matches!(
            result,
            Err(CzError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("missing.toml"));
        assert!(matches!(
            result,
            Err(CzError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_find_config_in_parent_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".cz.toml"), "[format]\nmax_line_width = 80\n").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".cz.toml"));

        let config = load_config_from(&found).unwrap();
        assert_eq!(config.format.max_line_width, 80);
    }
}
