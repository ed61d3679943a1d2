//! The lifestyle selection contract and its built-in variants.

use crate::descriptor::TypeDescriptor;
use crate::error::{Error, Result};
use crate::lifestyle::Lifestyle;
use crate::options::{ContainerOptions, OptionsInner};
use crate::requires;
use std::fmt;
use std::sync::Weak;

/// Picks the [`Lifestyle`] for a registration that does not name one.
///
/// The registration pipeline calls the installed behavior once per such
/// registration. Implementations must be safe to call from several threads at
/// once and must not change the container's configuration while selecting.
///
/// Both arguments are required. Implementations are expected to reject an
/// absent argument with [`Error::ArgumentNull`] naming it, which is most easily
/// done through [`requires::is_not_null`]. The names carried are the Rust
/// parameter names `service_type` and `implementation_type` (`serviceType` and
/// `implementationType` in containers on other platforms).
pub trait LifestyleSelectionBehavior: Send + Sync {
  fn select_lifestyle(
    &self,
    service_type: Option<&TypeDescriptor>,
    implementation_type: Option<&TypeDescriptor>,
  ) -> Result<Lifestyle>;
}

/// Returns the container's current default lifestyle for every registration.
///
/// The default is read on each call, so changing it before the container
/// locks affects every later selection.
#[derive(Clone)]
pub struct DefaultLifestyleSelectionBehavior {
  // Weak, since the options own the installed behavior.
  options: Weak<OptionsInner>,
}

impl DefaultLifestyleSelectionBehavior {
  pub fn new(options: &ContainerOptions) -> Self {
    Self {
      options: options.downgrade(),
    }
  }

  pub(crate) fn from_weak(options: Weak<OptionsInner>) -> Self {
    Self { options }
  }

  fn lifestyle(&self) -> Result<Lifestyle> {
    self
      .options
      .upgrade()
      .map(|inner| ContainerOptions::from_inner(inner).default_lifestyle())
      .ok_or_else(|| Error::InvalidState("The container options have been dropped.".to_owned()))
  }
}

impl LifestyleSelectionBehavior for DefaultLifestyleSelectionBehavior {
  fn select_lifestyle(
    &self,
    service_type: Option<&TypeDescriptor>,
    implementation_type: Option<&TypeDescriptor>,
  ) -> Result<Lifestyle> {
    requires::is_not_null(service_type, "service_type")?;
    requires::is_not_null(implementation_type, "implementation_type")?;

    self.lifestyle()
  }
}

impl fmt::Debug for DefaultLifestyleSelectionBehavior {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.lifestyle() {
      Ok(lifestyle) => write!(f, "DefaultLifestyleSelectionBehavior({lifestyle})"),
      Err(_) => f.write_str("DefaultLifestyleSelectionBehavior(<detached>)"),
    }
  }
}

/// Gives implementations that own a resource their own lifestyle.
///
/// An implementation owns a resource when dropping it runs code (see
/// [`TypeDescriptor::owns_resource`]). Every other implementation gets the
/// container's current default.
#[derive(Debug, Clone)]
pub struct ResourceAwareLifestyleSelectionBehavior {
  resource_lifestyle: Lifestyle,
  fallback: DefaultLifestyleSelectionBehavior,
}

impl ResourceAwareLifestyleSelectionBehavior {
  pub fn new(options: &ContainerOptions, resource_lifestyle: Lifestyle) -> Self {
    Self {
      resource_lifestyle,
      fallback: DefaultLifestyleSelectionBehavior::new(options),
    }
  }
}

impl LifestyleSelectionBehavior for ResourceAwareLifestyleSelectionBehavior {
  fn select_lifestyle(
    &self,
    service_type: Option<&TypeDescriptor>,
    implementation_type: Option<&TypeDescriptor>,
  ) -> Result<Lifestyle> {
    requires::is_not_null(service_type, "service_type")?;
    let implementation = requires::is_not_null(implementation_type, "implementation_type")?;

    if implementation.owns_resource() {
      return Ok(self.resource_lifestyle.clone());
    }
    self.fallback.select_lifestyle(service_type, implementation_type)
  }
}

/// A behavior backed by a closure. Created with [`from_fn`].
#[derive(Clone)]
pub struct FnLifestyleSelectionBehavior<F> {
  select: F,
}

/// Wraps a closure as a [`LifestyleSelectionBehavior`].
///
/// Argument validation is handled by the wrapper; the closure only sees
/// present descriptors.
///
/// # Examples
///
/// ```
/// use fibre_lifestyle::{from_fn, ContainerOptions, Lifestyle};
///
/// let options = ContainerOptions::new();
/// options
///   .set_lifestyle_selection_behavior(from_fn(|_service, _implementation| Lifestyle::singleton()))
///   .unwrap();
/// ```
pub fn from_fn<F>(select: F) -> FnLifestyleSelectionBehavior<F>
where
  F: Fn(&TypeDescriptor, &TypeDescriptor) -> Lifestyle + Send + Sync,
{
  FnLifestyleSelectionBehavior { select }
}

impl<F> LifestyleSelectionBehavior for FnLifestyleSelectionBehavior<F>
where
  F: Fn(&TypeDescriptor, &TypeDescriptor) -> Lifestyle + Send + Sync,
{
  fn select_lifestyle(
    &self,
    service_type: Option<&TypeDescriptor>,
    implementation_type: Option<&TypeDescriptor>,
  ) -> Result<Lifestyle> {
    let service = requires::is_not_null(service_type, "service_type")?;
    let implementation = requires::is_not_null(implementation_type, "implementation_type")?;

    Ok((self.select)(service, implementation))
  }
}

impl<F> fmt::Debug for FnLifestyleSelectionBehavior<F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("FnLifestyleSelectionBehavior(..)")
  }
}
