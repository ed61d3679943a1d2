//! Externally loaded container settings.

use crate::error::{Error, Result};
use crate::lifestyle::LifestyleKind;
use serde::Deserialize;

/// Container settings as read from a configuration file.
///
/// ```yaml
/// default_lifestyle: scoped
/// allow_overriding_registrations: true
/// ```
///
/// Missing keys keep their defaults. Apply with [`ContainerOptions::apply`](crate::ContainerOptions::apply).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContainerSettings {
  #[serde(default = "default_lifestyle")]
  pub default_lifestyle: LifestyleKind,
  #[serde(default)]
  pub allow_overriding_registrations: bool,
}

fn default_lifestyle() -> LifestyleKind {
  LifestyleKind::Transient
}

impl Default for ContainerSettings {
  fn default() -> Self {
    Self {
      default_lifestyle: default_lifestyle(),
      allow_overriding_registrations: false,
    }
  }
}

impl ContainerSettings {
  pub fn from_yaml_str(yaml: &str) -> Result<Self> {
    serde_yaml::from_str(yaml).map_err(|source| Error::Settings { source })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn missing_keys_use_defaults() {
    let settings = ContainerSettings::from_yaml_str("allow_overriding_registrations: true").unwrap();
    assert_eq!(
      settings,
      ContainerSettings {
        default_lifestyle: LifestyleKind::Transient,
        allow_overriding_registrations: true,
      }
    );
  }

  #[test]
  fn lifestyle_names_are_snake_case() {
    let settings = ContainerSettings::from_yaml_str("default_lifestyle: singleton").unwrap();
    assert_eq!(settings.default_lifestyle, LifestyleKind::Singleton);
  }
}
