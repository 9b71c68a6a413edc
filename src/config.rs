use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub base_url: String,
    /// Publisher organization name
    pub name: String,
    /// Logo path relative to `base_url`
    pub logo: String,
    pub default_author: String,
    pub default_keywords: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://iacwave.com.br".to_string(),
            name: "IACWave".to_string(),
            logo: "logo_iacwave.png".to_string(),
            default_author: "IACWave".to_string(),
            default_keywords: "DevOps, Cloud, IaC".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Custom page template; the bundled one is used when unset
    pub template: Option<PathBuf>,
}

impl Config {
    /// The configuration bundled with the binary.
    pub fn compiled_default() -> Self {
        // Validated by build.rs, so parsing only fails if the schema drifts
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file. Returns `Ok(None)` if the file does
    /// not exist.
    pub fn load_from_path(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            log::debug!("no config file at {}", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("loaded config from {}", path.display());
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn compiled_default_matches_default() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from_path(&dir.path().join("md2post.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[site]\nbase_url = \"https://example.org/\"").unwrap();

        let config = Config::load_from_path(file.path()).unwrap().unwrap();
        assert_eq!(config.site.base_url, "https://example.org/");
        assert_eq!(config.site.name, "IACWave");
        assert_eq!(config.render.template, None);
    }

    #[test]
    fn template_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[render]\ntemplate = \"tpl/post.html\"").unwrap();

        let config = Config::load_from_path(file.path()).unwrap().unwrap();
        assert_eq!(config.render.template, Some(PathBuf::from("tpl/post.html")));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[site\nbase_url = ").unwrap();

        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }
}
