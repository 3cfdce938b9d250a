use std::fs;
use std::path::{Path, PathBuf};

use super::core::EsgscoreConfig;
use super::thresholds::StatusThresholds;
use crate::errors::Error;

pub const CONFIG_FILE_NAME: &str = ".esgscore.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<EsgscoreConfig, String> {
    let mut config = toml::from_str::<EsgscoreConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Some(thresholds) = config.thresholds {
        if let Err(e) = thresholds.validate() {
            log::warn!("Invalid status thresholds: {}. Using defaults.", e);
            config.thresholds = Some(StatusThresholds::default());
        }
    }

    Ok(config)
}

/// Load an explicitly named config file. Unlike discovery, a missing or
/// unparsable file is an error here.
pub fn load_config_from(path: &Path) -> Result<EsgscoreConfig, Error> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_and_validate_config(&contents).map_err(Error::Config)
}

/// Pure function to try loading config from a specific path
fn try_load_config_from_path(config_path: &Path) -> Option<EsgscoreConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search the current directory and its ancestors for `.esgscore.toml`.
pub fn load_config() -> EsgscoreConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return EsgscoreConfig::default();
        }
    };
    discover_config(current)
}

fn discover_config(start: PathBuf) -> EsgscoreConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            EsgscoreConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Lang;
    use crate::io::writers::OutputFormat;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [thresholds]
            basic = 25.0
            developing = 55.0
            intermediate = 85.0

            [output]
            default_format = "markdown"
            language = "ms"
        "#})
        .unwrap();

        let thresholds = config.thresholds();
        assert_eq!(thresholds.basic, 25.0);
        assert_eq!(thresholds.intermediate, 85.0);
        assert_eq!(config.default_format(), OutputFormat::Markdown);
        assert_eq!(config.language(), Lang::Ms);
    }

    #[test]
    fn test_invalid_thresholds_fall_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [thresholds]
            basic = 60.0
            developing = 50.0
        "#})
        .unwrap();
        assert_eq!(config.thresholds(), StatusThresholds::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config.thresholds(), StatusThresholds::default());
        assert_eq!(config.default_format(), OutputFormat::Terminal);
        assert_eq!(config.language(), Lang::En);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(parse_and_validate_config("[thresholds\nbasic = ").is_err());
    }

    #[test]
    fn test_discovers_config_in_ancestor() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[output]\nlanguage = \"ms\"\n",
        )
        .unwrap();
        let nested = temp.path().join("reports").join("2023");
        std::fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert_eq!(config.language(), Lang::Ms);
    }

    #[test]
    fn test_load_config_from_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        let result = load_config_from(&temp.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }
}
