use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub fallback: FallbackConfig,
    pub listing: ListingConfig,
}

/// What the responder shows for any path other than the environment listing.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FallbackConfig {
    pub kind: FallbackKind,
    pub greeting: String,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FallbackKind {
    #[default]
    Greeting,
    Timestamp,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ListingConfig {
    pub style: ListingStyle,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingStyle {
    /// `KEY: VALUE` lines inside a single `<pre>` block.
    #[default]
    Preformatted,
    /// One `<p><strong>KEY:</strong> VALUE</p>` per variable.
    Paragraphs,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            kind: FallbackKind::Greeting,
            greeting: "Welcome to our site!".to_string(),
        }
    }
}

impl Config {
    /// Reads the config file if there is one. A missing file yields the defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        Self::from_toml_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    fn get_config_path() -> PathBuf {
        if cfg!(windows) {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("C:\\ProgramData"))
                .join("cgienv")
                .join("config.toml")
        } else {
            PathBuf::from("/etc/cgienv.toml")
        }
    }

    pub fn config_file_path() -> PathBuf { Self::get_config_path() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() -> Result<()> {
        assert_eq!(Config::from_toml_str("")?, Config::default());
        Ok(())
    }

    #[test]
    fn defaults_match_greeting_page() {
        let config = Config::default();
        assert_eq!(config.fallback.kind, FallbackKind::Greeting);
        assert_eq!(config.fallback.greeting, "Welcome to our site!");
        assert_eq!(config.listing.style, ListingStyle::Preformatted);
    }

    #[test]
    fn partial_file_keeps_other_defaults() -> Result<()> {
        let config = Config::from_toml_str(
            r#"
            [fallback]
            kind = "timestamp"
            "#,
        )?;
        assert_eq!(config.fallback.kind, FallbackKind::Timestamp);
        assert_eq!(config.fallback.greeting, "Welcome to our site!");
        assert_eq!(config.listing.style, ListingStyle::Preformatted);
        Ok(())
    }

    #[test]
    fn full_file() -> Result<()> {
        let config = Config::from_toml_str(
            r#"
            [fallback]
            kind = "greeting"
            greeting = "Hello there"

            [listing]
            style = "paragraphs"
            "#,
        )?;
        assert_eq!(config.fallback.greeting, "Hello there");
        assert_eq!(config.listing.style, ListingStyle::Paragraphs);
        Ok(())
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let parsed = Config::from_toml_str(
            r#"
            [fallback]
            kind = "both"
            "#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_file_is_default() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = Config::load_from(&dir.path().join("cgienv.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn reads_file_from_path() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cgienv.toml");
        fs::write(&path, "[listing]\nstyle = \"paragraphs\"\n")?;
        let config = Config::load_from(&path)?;
        assert_eq!(config.listing.style, ListingStyle::Paragraphs);
        Ok(())
    }

    #[test]
    fn malformed_file_names_the_path() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cgienv.toml");
        fs::write(&path, "[fallback\nkind = ")?;
        let err = Config::load_from(&path).unwrap_err();
        assert_eq!(err.to_string(), format!("Failed to parse config file: {}", path.display()));
        Ok(())
    }

    #[test]
    fn config_path_is_fixed() {
        let path = Config::config_file_path();
        if cfg!(windows) {
            assert!(path.ends_with("cgienv/config.toml"));
        } else {
            assert_eq!(path, PathBuf::from("/etc/cgienv.toml"));
        }
    }
}
