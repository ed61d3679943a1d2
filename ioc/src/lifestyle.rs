//! Lifestyle values: the lifetime policy attached to every registration.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// The family a [`Lifestyle`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleKind {
  /// A new instance for every request.
  Transient,
  /// One instance for the lifetime of the container.
  Singleton,
  /// One instance per active scope.
  Scoped,
  /// A user-defined policy.
  Custom,
}

struct LifestyleInner {
  name: String,
  kind: LifestyleKind,
}

// The built-in lifestyles are shared so that every accessor returns the same identity.
static TRANSIENT: Lazy<Lifestyle> = Lazy::new(|| Lifestyle::new("Transient", LifestyleKind::Transient));
static SINGLETON: Lazy<Lifestyle> = Lazy::new(|| Lifestyle::new("Singleton", LifestyleKind::Singleton));
static SCOPED: Lazy<Lifestyle> = Lazy::new(|| Lifestyle::new("Scoped", LifestyleKind::Scoped));

/// An immutable lifetime policy.
///
/// Cloning a `Lifestyle` is cheap and keeps its identity: two values compare
/// equal only when they are clones of the same original. Two custom
/// lifestyles that happen to share a name are still distinct.
#[derive(Clone)]
pub struct Lifestyle {
  inner: Arc<LifestyleInner>,
}

impl Lifestyle {
  fn new(name: &str, kind: LifestyleKind) -> Self {
    Self {
      inner: Arc::new(LifestyleInner {
        name: name.to_owned(),
        kind,
      }),
    }
  }

  pub fn transient() -> Lifestyle {
    TRANSIENT.clone()
  }

  pub fn singleton() -> Lifestyle {
    SINGLETON.clone()
  }

  pub fn scoped() -> Lifestyle {
    SCOPED.clone()
  }

  /// Creates a new user-defined lifestyle with its own identity.
  pub fn custom(name: &str) -> Lifestyle {
    Self::new(name, LifestyleKind::Custom)
  }

  /// Returns the shared built-in lifestyle for `kind`, or `None` for [`LifestyleKind::Custom`].
  pub fn from_kind(kind: LifestyleKind) -> Option<Lifestyle> {
    match kind {
      LifestyleKind::Transient => Some(Self::transient()),
      LifestyleKind::Singleton => Some(Self::singleton()),
      LifestyleKind::Scoped => Some(Self::scoped()),
      LifestyleKind::Custom => None,
    }
  }

  pub fn name(&self) -> &str {
    &self.inner.name
  }

  pub fn kind(&self) -> LifestyleKind {
    self.inner.kind
  }
}

impl PartialEq for Lifestyle {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }
}

impl Eq for Lifestyle {}

impl fmt::Debug for Lifestyle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Lifestyle({})", self.inner.name)
  }
}

impl fmt::Display for Lifestyle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.inner.name)
  }
}
