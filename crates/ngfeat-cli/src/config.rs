//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `NGFEAT_<SECTION>__<KEY>`
//!    (e.g. `NGFEAT_SCAFFOLD__APP_ROOT=projects/shop/src/app`)
//! 3. The file given with `--config` (must exist)
//! 4. `.ngfeat.toml` in the current directory
//! 5. `config.toml` in the platform config directory
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ngfeat_core::domain::ChildLayout;

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = ".ngfeat.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "NGFEAT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where and how features are written.
    pub scaffold: ScaffoldConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub app_root: PathBuf,
    pub layout: ChildLayout,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `<kind>.tpl` overrides.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            app_root: PathBuf::from("src/app"),
            layout: ChildLayout::Flat,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, files, and the environment.
    ///
    /// `config_file` is the path passed via `--config`; when given it must
    /// exist. The global and local files are optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&AppConfig::default()).context("invalid built-in defaults")?,
        );

        if let Some(global) = Self::global_config_path() {
            debug!(path = %global.display(), "global config candidate");
            builder = builder.add_source(File::from(global).required(false));
        }

        builder = builder.add_source(
            File::from(PathBuf::from(LOCAL_CONFIG_FILE))
                .format(FileFormat::Toml)
                .required(false),
        );

        if let Some(path) = config_file {
            debug!(path = %path.display(), "explicit config file");
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("failed to parse configuration")
    }

    /// Path of the global configuration file, if the platform has a config
    /// directory.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "ngfeat", "ngfeat")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Path `init` writes to by default, falling back to `.ngfeat.toml`.
    pub fn config_path() -> PathBuf {
        Self::global_config_path().unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_angular_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.scaffold.app_root, PathBuf::from("src/app"));
        assert_eq!(cfg.scaffold.layout, ChildLayout::Flat);
        assert!(cfg.templates.dir.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ngfeat.toml");
        fs::write(
            &path,
            "[scaffold]\napp_root = \"projects/shop/src/app\"\nlayout = \"under-feature\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.scaffold.app_root, PathBuf::from("projects/shop/src/app"));
        assert_eq!(cfg.scaffold.layout, ChildLayout::UnderFeature);
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("app_root = \"src/app\""));
        assert!(text.contains("layout = \"flat\""));
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
