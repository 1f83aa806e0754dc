//! Layered configuration.
//!
//! Values are merged from lowest to highest precedence:
//!
//! 1. built-in defaults;
//! 2. a YAML file, either the one passed with `--config` or
//!    `$HOME/.action-docs.yaml` (`.yml` also accepted) when it exists;
//! 3. `ACTION_DOCS_*` environment variables;
//! 4. command-line flags that were actually given.

mod yaml;

use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

pub use yaml::SaphyrYaml;

use crate::error::ActionDocsError;

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "ACTION_DOCS_";

/// File names looked up in the home directory.
pub const HOME_CONFIG_NAMES: [&str; 2] = [".action-docs.yaml", ".action-docs.yml"];

/// Settings for a documentation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory searched recursively for action definitions.
    pub actions_path: Utf8PathBuf,
    /// Directory holding workflow definitions.
    pub workflows_path: Utf8PathBuf,
    /// Directory the workflow README is written to.
    pub workflows_output: Utf8PathBuf,
    /// File name of every generated README.
    pub readme_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            actions_path: Utf8PathBuf::from("."),
            workflows_path: Utf8PathBuf::from(".github/workflows"),
            workflows_output: Utf8PathBuf::from(".github/workflows"),
            readme_name: String::from("README.md"),
        }
    }
}

/// Values supplied on the command line. `None` leaves lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigOverrides {
    /// Overrides [`AppConfig::actions_path`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions_path: Option<Utf8PathBuf>,
    /// Overrides [`AppConfig::workflows_path`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflows_path: Option<Utf8PathBuf>,
    /// Overrides [`AppConfig::workflows_output`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflows_output: Option<Utf8PathBuf>,
}

/// Loads the configuration, looking in the home directory when no explicit
/// file is given.
///
/// # Errors
///
/// Returns [`ActionDocsError::MissingConfig`] when `explicit` does not exist
/// and [`ActionDocsError::Config`] when a layer cannot be parsed or extracted.
pub fn load_config(
    explicit: Option<&Utf8Path>,
    overrides: &ConfigOverrides,
) -> Result<AppConfig, ActionDocsError> {
    let file = match explicit {
        Some(path) if path.is_file() => Some(path.to_path_buf()),
        Some(path) => return Err(ActionDocsError::MissingConfig(path.to_path_buf())),
        None => home_config_file(),
    };
    tracing::debug!(config_file = ?file, "resolved configuration file");
    let config = figment(file.as_deref(), overrides).extract()?;
    Ok(config)
}

/// The first of [`HOME_CONFIG_NAMES`] that exists in the home directory.
///
/// A home directory that is unknown or not UTF-8 has no configuration file.
#[must_use]
pub fn home_config_file() -> Option<Utf8PathBuf> {
    dirs::home_dir().and_then(config_in_home)
}

fn config_in_home(home_dir: PathBuf) -> Option<Utf8PathBuf> {
    let home = Utf8PathBuf::from_path_buf(home_dir)
        .inspect_err(|path| {
            tracing::debug!(home = %path.display(), "home directory is not UTF-8; skipping");
        })
        .ok()?;
    HOME_CONFIG_NAMES
        .iter()
        .map(|name| home.join(name))
        .find(|path| path.is_file())
}

/// Assembles the provider stack without extracting it.
#[must_use]
pub fn figment(file: Option<&Utf8Path>, overrides: &ConfigOverrides) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    if let Some(path) = file {
        figment = figment.merge(SaphyrYaml::file(path));
    }
    figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
}
