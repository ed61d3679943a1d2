//! Argument and state guards used at every public entry point.

use crate::error::{Error, Result};

/// Message used for every mutation rejected after the container locked.
pub(crate) const LOCKED_MESSAGE: &str = "The container can't be changed after the first call to \
   get_registration or lock. Please see the container documentation to learn why the container \
   is locked.";

/// Unwraps `value`, or fails with [`Error::ArgumentNull`] naming `param_name`.
#[inline]
pub fn is_not_null<T>(value: Option<T>, param_name: &'static str) -> Result<T> {
  value.ok_or(Error::ArgumentNull { param_name })
}

/// Fails with [`Error::InvalidState`] when `locked` is set.
#[inline]
pub fn is_not_locked(locked: bool) -> Result<()> {
  if locked {
    tracing::warn!("rejected configuration change on a locked container");
    return Err(Error::InvalidState(LOCKED_MESSAGE.to_owned()));
  }
  Ok(())
}
