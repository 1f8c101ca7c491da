//! Scope matchers described in TOML.
//!
//! ```toml
//! [[language]]
//! language-id = "rust"
//!
//! [language.scopes.argumentOrParameter]
//! parents = ["arguments", "parameters"]
//! delimiter = ","
//! ```
//!
//! The built-in definitions ship with the crate; a user file is merged on top
//! of them one scope at a time.

use std::{
  collections::BTreeMap,
  io,
  path::{
    Path,
    PathBuf,
  },
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;
use tracing::debug;

use crate::{
  scope::{
    NodeMatcher,
    ScopeRegistry,
  },
  target::ScopeType,
};

const BUILTIN_SCOPES: &str = include_str!("default_scopes.toml");

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read {}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("invalid scope configuration")]
  Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScopeConfig {
  #[serde(default)]
  pub language: Vec<LanguageScopes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct LanguageScopes {
  pub language_id: String,
  #[serde(default)]
  pub scopes:      BTreeMap<ScopeType, ScopeDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScopeDefinition {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub kinds:     Vec<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub parents:   Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub field:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub delimiter: Option<String>,
}

impl From<&ScopeDefinition> for NodeMatcher {
  fn from(definition: &ScopeDefinition) -> Self {
    NodeMatcher {
      kinds:     definition.kinds.clone(),
      parents:   definition.parents.clone(),
      field:     definition.field.clone(),
      delimiter: definition.delimiter.clone(),
    }
  }
}

impl ScopeConfig {
  pub fn from_toml_str(source: &str) -> Result<Self> {
    Ok(toml::from_str(source)?)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| {
      ConfigError::Io {
        path: path.to_path_buf(),
        source,
      }
    })?;
    Self::from_toml_str(&source)
  }

  /// Definitions shipped with the crate.
  pub fn builtin() -> Result<Self> {
    Self::from_toml_str(BUILTIN_SCOPES)
  }

  /// Layers `other` on top of `self`. A scope defined in both takes
  /// `other`'s definition; everything else is kept.
  #[must_use]
  pub fn merge(mut self, other: ScopeConfig) -> Self {
    for language in other.language {
      match self
        .language
        .iter_mut()
        .find(|existing| existing.language_id == language.language_id)
      {
        Some(existing) => existing.scopes.extend(language.scopes),
        None => self.language.push(language),
      }
    }
    self
  }

  pub fn language(&self, language_id: &str) -> Option<&LanguageScopes> {
    self
      .language
      .iter()
      .find(|language| language.language_id == language_id)
  }
}

impl ScopeRegistry {
  pub fn from_config(config: &ScopeConfig) -> Self {
    let mut registry = Self::new();
    for language in &config.language {
      for (scope, definition) in &language.scopes {
        registry.register(
          language.language_id.clone(),
          *scope,
          NodeMatcher::from(definition),
        );
      }
      debug!(
        language = %language.language_id,
        scopes = language.scopes.len(),
        "registered scope matchers"
      );
    }
    registry
  }

  /// A registry of the built-in definitions.
  pub fn builtin() -> Result<Self> {
    Ok(Self::from_config(&ScopeConfig::builtin()?))
  }
}
