//! Per-container configuration with a one-way lock.

use crate::behavior::{DefaultLifestyleSelectionBehavior, LifestyleSelectionBehavior};
use crate::error::{Error, Result};
use crate::lifestyle::Lifestyle;
use crate::requires;
use crate::settings::ContainerSettings;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

struct OptionsState {
  default_lifestyle: Lifestyle,
  behavior: Arc<dyn LifestyleSelectionBehavior>,
  allow_overriding_registrations: bool,
}

pub(crate) struct OptionsInner {
  state: RwLock<OptionsState>,
  // Only flipped while holding the `state` write lock.
  locked: AtomicBool,
}

/// The configuration of a single container.
///
/// `ContainerOptions` is a shared handle: clones refer to the same
/// configuration. All setters fail with [`Error::InvalidState`] once the
/// configuration has been locked, which the owning container does on its first
/// registration lookup. Getters work at any time.
///
/// A fresh configuration uses [`Lifestyle::transient`] as its default and the
/// [`DefaultLifestyleSelectionBehavior`].
#[derive(Clone)]
pub struct ContainerOptions {
  inner: Arc<OptionsInner>,
}

impl Default for ContainerOptions {
  fn default() -> Self {
    Self::new()
  }
}

impl ContainerOptions {
  pub fn new() -> Self {
    let inner = Arc::new_cyclic(|weak: &Weak<OptionsInner>| OptionsInner {
      state: RwLock::new(OptionsState {
        default_lifestyle: Lifestyle::transient(),
        behavior: Arc::new(DefaultLifestyleSelectionBehavior::from_weak(weak.clone())),
        allow_overriding_registrations: false,
      }),
      locked: AtomicBool::new(false),
    });
    Self { inner }
  }

  pub(crate) fn from_inner(inner: Arc<OptionsInner>) -> Self {
    Self { inner }
  }

  pub(crate) fn downgrade(&self) -> Weak<OptionsInner> {
    Arc::downgrade(&self.inner)
  }

  // --- Reads ---

  /// The lifestyle used for registrations the installed behavior does not specialize.
  pub fn default_lifestyle(&self) -> Lifestyle {
    self.inner.state.read().default_lifestyle.clone()
  }

  /// The currently installed selection behavior.
  pub fn lifestyle_selection_behavior(&self) -> Arc<dyn LifestyleSelectionBehavior> {
    Arc::clone(&self.inner.state.read().behavior)
  }

  pub fn allow_overriding_registrations(&self) -> bool {
    self.inner.state.read().allow_overriding_registrations
  }

  pub fn is_locked(&self) -> bool {
    self.inner.locked.load(Ordering::Acquire)
  }

  // --- Mutations ---

  pub fn set_default_lifestyle(&self, lifestyle: Lifestyle) -> Result<()> {
    self.mutate(|state| {
      tracing::debug!(lifestyle = %lifestyle, "default lifestyle changed");
      state.default_lifestyle = lifestyle;
      Ok(())
    })
  }

  /// Replaces the installed selection behavior. The last call before locking wins.
  pub fn set_lifestyle_selection_behavior<B>(&self, behavior: B) -> Result<()>
  where
    B: LifestyleSelectionBehavior + 'static,
  {
    let behavior: Arc<dyn LifestyleSelectionBehavior> = Arc::new(behavior);
    self.set_lifestyle_selection_behavior_arc(Some(behavior))
  }

  /// Replaces the installed selection behavior with an already shared one.
  pub fn set_lifestyle_selection_behavior_arc(
    &self,
    behavior: Option<Arc<dyn LifestyleSelectionBehavior>>,
  ) -> Result<()> {
    let behavior = requires::is_not_null(behavior, "behavior")?;
    self.mutate(|state| {
      tracing::debug!("lifestyle selection behavior replaced");
      state.behavior = behavior;
      Ok(())
    })
  }

  pub fn set_allow_overriding_registrations(&self, allow: bool) -> Result<()> {
    self.mutate(|state| {
      tracing::debug!(allow, "allow overriding registrations changed");
      state.allow_overriding_registrations = allow;
      Ok(())
    })
  }

  /// Applies externally loaded settings in one step.
  ///
  /// Either every value is applied or, on error, none is.
  pub fn apply(&self, settings: &ContainerSettings) -> Result<()> {
    let lifestyle = Lifestyle::from_kind(settings.default_lifestyle).ok_or_else(|| {
      Error::InvalidConfigValue {
        field: "default_lifestyle".to_owned(),
        message: "custom lifestyles can't be selected by name".to_owned(),
      }
    })?;

    self.mutate(|state| {
      tracing::debug!(
        lifestyle = %lifestyle,
        allow_overriding_registrations = settings.allow_overriding_registrations,
        "container settings applied"
      );
      state.default_lifestyle = lifestyle;
      state.allow_overriding_registrations = settings.allow_overriding_registrations;
      Ok(())
    })
  }

  /// Locks the configuration. Further mutations fail. Locking twice is a no-op.
  pub fn lock(&self) {
    if self.is_locked() {
      return;
    }
    let _state = self.inner.state.write();
    if !self.inner.locked.swap(true, Ordering::AcqRel) {
      tracing::debug!("container options locked");
    }
  }

  /// Runs `change` while holding off [`lock`](Self::lock), failing if the options are already locked.
  ///
  /// `change` receives the current `allow_overriding_registrations` value and must not
  /// call back into these options.
  pub(crate) fn while_unlocked<T, F>(&self, change: F) -> Result<T>
  where
    F: FnOnce(bool) -> Result<T>,
  {
    let state = self.inner.state.read();
    requires::is_not_locked(self.inner.locked.load(Ordering::Acquire))?;
    change(state.allow_overriding_registrations)
  }

  fn mutate<F>(&self, change: F) -> Result<()>
  where
    F: FnOnce(&mut OptionsState) -> Result<()>,
  {
    let mut state = self.inner.state.write();
    requires::is_not_locked(self.inner.locked.load(Ordering::Acquire))?;
    change(&mut state)
  }
}

impl fmt::Debug for ContainerOptions {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let state = self.inner.state.read();
    f.debug_struct("ContainerOptions")
      .field("default_lifestyle", &state.default_lifestyle)
      .field("allow_overriding_registrations", &state.allow_overriding_registrations)
      .field("locked", &self.is_locked())
      .finish_non_exhaustive()
  }
}
