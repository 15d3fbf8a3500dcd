//! Site configuration management for `visioncut.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `[base]`     | Brand metadata (name, url, locale, defaults)    |
//! | `[business]` | Business facts for structured data (geo, hours) |
//! | `[build]`    | Output path for head snapshots                  |
//!
//! # Example
//!
//! ```toml
//! [base]
//! name = "VisionCut"
//! url = "https://visioncut.com"
//!
//! [business]
//! region = "Karnataka"
//!
//! [build]
//! output = "public"
//! ```

mod base;
mod business;
pub mod defaults;
mod error;

pub use base::BaseConfig;
pub use business::BusinessConfig;

use crate::cli::{Cli, Commands};
use anyhow::Result;
use educe::Educe;
use error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// [build] Section
// ============================================================================

/// `[build]` section in visioncut.toml.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root; CLI-only, never read from the config file.
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Output directory for head snapshots (relative to root).
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Remove the output directory before building.
    #[serde(default)]
    pub clean: bool,
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing visioncut.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Brand metadata
    #[serde(default)]
    pub base: BaseConfig,

    /// Business facts for structured data
    #[serde(default)]
    pub business: BusinessConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Resolved output directory (root + build.output).
    pub fn output_dir(&self) -> PathBuf {
        self.get_root().join(&self.build.output)
    }

    /// Apply CLI overrides on top of file/default values.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        self.build.root = cli.root.clone();

        if let Commands::Build { output, clean } = &cli.command {
            if let Some(output) = output {
                self.build.output = output.clone();
            }
            if *clean {
                self.build.clean = true;
            }
        }
    }

    /// Validate configuration values that every command relies on.
    pub fn validate(&self) -> Result<()> {
        if self.base.name.is_empty() {
            return Err(ConfigError::Validation("base.name must not be empty".into()).into());
        }
        if self.base.title_suffix.is_empty() {
            return Err(
                ConfigError::Validation("base.title_suffix must not be empty".into()).into(),
            );
        }
        if !self.base.url.starts_with("http://") && !self.base.url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "base.url must be an absolute http(s) URL, got `{}`",
                self.base.url
            ))
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.base.name, "VisionCut");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(!config.build.clean);
    }

    #[test]
    fn test_build_section() {
        let config = SiteConfig::from_str(
            r#"
            [build]
            output = "dist"
            clean = true
        "#,
        )
        .unwrap();

        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(config.build.clean);
    }

    #[test]
    fn test_validate_rejects_relative_url() {
        let mut config = SiteConfig::default();
        config.base.url = "visioncut.com".into();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("absolute http(s) URL"));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut config = SiteConfig::default();
        config.base.name = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_dir_joins_root() {
        let mut config = SiteConfig::default();
        config.build.root = Some(PathBuf::from("/tmp/site"));

        assert_eq!(config.output_dir(), PathBuf::from("/tmp/site/public"));
    }
}
