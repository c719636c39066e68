//! `AppConfig` struct and TOML loading.

use std::path::Path;

use anyhow::{Context, Result};
use filmdeck_pipeline::{ImageConfig, PipelineSettings};
use serde::Deserialize;
use url::Url;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// TMDB API settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
    /// Image resolution settings.
    #[serde(default)]
    pub images: ImagesConfig,
}

/// TMDB API configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct TmdbConfig {
    /// API base URL (default: `https://api.themoviedb.org/3/`).
    pub base_url: Option<String>,
    /// Response language (default: `en-US`).
    pub language: Option<String>,
}

/// Image configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct ImagesConfig {
    /// Prefix prepended to poster and profile paths.
    pub cdn_prefix: Option<String>,
    /// Image shown for persons without a profile picture.
    pub person_placeholder: Option<String>,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Returns the configured API base URL, if any.
    ///
    /// A trailing `/` is appended when missing so endpoint paths join
    /// below the version segment.
    ///
    /// # Errors
    ///
    /// Returns an error if `tmdb.base_url` is not a valid URL.
    pub fn tmdb_base_url(&self) -> Result<Option<Url>> {
        let Some(raw) = self.tmdb.base_url.as_deref() else {
            return Ok(None);
        };
        let mut normalized = String::from(raw);
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let url = Url::parse(&normalized)
            .with_context(|| format!("invalid tmdb.base_url: {raw}"))?;
        Ok(Some(url))
    }

    /// Builds pipeline settings, falling back to defaults for unset keys.
    #[must_use]
    pub fn pipeline_settings(&self) -> PipelineSettings {
        let defaults = PipelineSettings::default();
        let image_defaults = ImageConfig::default();
        PipelineSettings {
            language: self.tmdb.language.clone().unwrap_or(defaults.language),
            images: ImageConfig {
                cdn_prefix: self
                    .images
                    .cdn_prefix
                    .clone()
                    .unwrap_or(image_defaults.cdn_prefix),
                person_placeholder: self
                    .images
                    .person_placeholder
                    .clone()
                    .unwrap_or(image_defaults.person_placeholder),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = AppConfig::default();

        // Assert
        assert_eq!(config.pipeline_settings(), PipelineSettings::default());
        assert!(config.tmdb_base_url().unwrap().is_none());
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[tmdb]
base_url = "http://localhost:8080/3"
language = "ja-JP"

[images]
cdn_prefix = "https://image.tmdb.org/t/p/w185"
person_placeholder = "assets/nobody.png"
"#,
        )
        .unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();
        let settings = config.pipeline_settings();

        // Assert
        assert_eq!(
            config.tmdb_base_url().unwrap().unwrap().as_str(),
            "http://localhost:8080/3/"
        );
        assert_eq!(settings.language, "ja-JP");
        assert_eq!(settings.images.cdn_prefix, "https://image.tmdb.org/t/p/w185");
        assert_eq!(settings.images.person_placeholder, "assets/nobody.png");
    }

    #[test]
    fn test_load_partial_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tmdb]\nlanguage = \"de-DE\"\n").unwrap();

        // Act
        let settings = AppConfig::load(&path).unwrap().pipeline_settings();

        // Assert
        assert_eq!(settings.language, "de-DE");
        assert_eq!(settings.images, ImageConfig::default());
    }

    #[test]
    fn test_load_empty_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tmdb\nlanguage = ").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.unwrap_err().to_string().contains("failed to parse"));
    }

    #[test]
    fn test_invalid_base_url_fails() {
        // Arrange
        let config = AppConfig {
            tmdb: TmdbConfig {
                base_url: Some(String::from("not a url")),
                language: None,
            },
            images: ImagesConfig::default(),
        };

        // Act
        let result = config.tmdb_base_url();

        // Assert
        assert!(result.is_err());
    }
}
