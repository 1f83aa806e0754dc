//! Figment provider for the `.action-docs.yaml` settings file.

use std::collections::BTreeMap;

use camino::Utf8PathBuf;
use figment::value::{Dict, Value};
use figment::{Metadata, Profile, Provider, error::Kind};
use serde_saphyr::Options;

/// Reads one YAML settings file into the default profile.
///
/// An empty file contributes no keys. Any document other than a mapping is
/// rejected.
#[derive(Debug, Clone)]
pub struct SaphyrYaml {
    path: Utf8PathBuf,
}

impl SaphyrYaml {
    /// Reads configuration from `path` when queried.
    #[must_use]
    pub fn file(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn settings(&self) -> Result<Dict, figment::Error> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|err| figment::Error::from(format!("failed to read {}: {err}", self.path)))?;
        let options = Options {
            strict_booleans: true,
            ..Options::default()
        };
        let document: Option<Value> = serde_saphyr::from_str_with_options(&contents, options)
            .map_err(|err| {
                figment::Error::from(Kind::Message(format!(
                    "failed to parse {}: {err}",
                    self.path
                )))
            })?;
        document.map_or_else(
            || Ok(Dict::new()),
            |value| {
                let actual = value.to_actual();
                value
                    .into_dict()
                    .ok_or_else(|| figment::Error::from(Kind::InvalidType(actual, "map".into())))
            },
        )
    }
}

impl Provider for SaphyrYaml {
    fn metadata(&self) -> Metadata {
        Metadata::from("action-docs settings", self.path.as_std_path())
    }

    fn data(&self) -> Result<BTreeMap<Profile, Dict>, figment::Error> {
        Ok(Profile::Default.collect(self.settings()?))
    }
}
