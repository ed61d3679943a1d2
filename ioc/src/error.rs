//! Error types shared by lifestyle selection, container options and registration.

use thiserror::Error;

/// The main error type for the `fibre_lifestyle` library.
#[derive(Debug, Error)]
pub enum Error {
  /// A required argument was absent.
  #[error("Value cannot be null. (Parameter '{param_name}')")]
  ArgumentNull { param_name: &'static str },

  /// A configuration or registration change was attempted after the container locked.
  #[error("{0}")]
  InvalidState(String),

  #[error("Type {service_type} has already been registered and overriding registrations is disabled.")]
  DuplicateRegistration { service_type: &'static str },

  #[error("Failed to parse container settings: {source}")]
  Settings {
    #[source]
    source: serde_yaml::Error,
  },

  #[error("Invalid configuration value for '{field}': {message}")]
  InvalidConfigValue { field: String, message: String },
}

/// The discriminant of an [`Error`], for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  ArgumentNull,
  InvalidState,
  DuplicateRegistration,
  Settings,
  InvalidConfigValue,
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::ArgumentNull { .. } => ErrorKind::ArgumentNull,
      Error::InvalidState(_) => ErrorKind::InvalidState,
      Error::DuplicateRegistration { .. } => ErrorKind::DuplicateRegistration,
      Error::Settings { .. } => ErrorKind::Settings,
      Error::InvalidConfigValue { .. } => ErrorKind::InvalidConfigValue,
    }
  }

  /// The name of the offending parameter, for argument errors.
  pub fn param_name(&self) -> Option<&'static str> {
    match self {
      Error::ArgumentNull { param_name } => Some(*param_name),
      _ => None,
    }
  }
}

/// A specialized `Result` type for `fibre_lifestyle` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
