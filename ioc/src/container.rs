//! The `Container` struct: the registration pipeline that consumes lifestyle selection.

use crate::descriptor::TypeDescriptor;
use crate::error::{Error, Result};
use crate::lifestyle::Lifestyle;
use crate::options::ContainerOptions;
use crate::requires;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::any::Any;

/// The outcome of a registration: which implementation serves a service, and how long it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
  service_type: TypeDescriptor,
  implementation_type: TypeDescriptor,
  lifestyle: Lifestyle,
}

impl Registration {
  pub fn service_type(&self) -> &TypeDescriptor {
    &self.service_type
  }

  pub fn implementation_type(&self) -> &TypeDescriptor {
    &self.implementation_type
  }

  pub fn lifestyle(&self) -> &Lifestyle {
    &self.lifestyle
  }
}

/// The Inversion of Control (IoC) container.
///
/// This struct holds the registrations for all services and owns the
/// [`ContainerOptions`] that govern them. It is thread-safe; registrations may
/// be added from several threads until the container locks.
///
/// Registrations that don't name a lifestyle get one from the installed
/// [`LifestyleSelectionBehavior`](crate::LifestyleSelectionBehavior).
#[derive(Default)]
pub struct Container {
  options: ContainerOptions,
  registrations: DashMap<TypeDescriptor, Registration>,
}

impl Container {
  /// Creates a new, empty `Container` with default options.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a new, empty `Container` governed by `options`.
  pub fn with_options(options: ContainerOptions) -> Self {
    Self {
      options,
      registrations: DashMap::new(),
    }
  }

  pub fn options(&self) -> &ContainerOptions {
    &self.options
  }

  // --- Registration ---

  /// Registers `I` as the implementation of `S`, letting the installed behavior pick the lifestyle.
  pub fn register<S: ?Sized + Any, I: Any>(&self) -> Result<Registration> {
    self.register_descriptors(
      Some(TypeDescriptor::of_service::<S>()),
      Some(TypeDescriptor::of::<I>()),
      None,
    )
  }

  /// Registers `I` as the implementation of `S` with an explicit lifestyle.
  pub fn register_with_lifestyle<S: ?Sized + Any, I: Any>(
    &self,
    lifestyle: Lifestyle,
  ) -> Result<Registration> {
    self.register_descriptors(
      Some(TypeDescriptor::of_service::<S>()),
      Some(TypeDescriptor::of::<I>()),
      Some(lifestyle),
    )
  }

  /// Registers a service from descriptors.
  ///
  /// When `lifestyle` is `None`, the installed selection behavior is asked
  /// exactly once. Its errors are returned as-is and nothing is registered.
  pub fn register_descriptors(
    &self,
    service_type: Option<TypeDescriptor>,
    implementation_type: Option<TypeDescriptor>,
    lifestyle: Option<Lifestyle>,
  ) -> Result<Registration> {
    let service_type = requires::is_not_null(service_type, "service_type")?;
    let implementation_type = requires::is_not_null(implementation_type, "implementation_type")?;
    requires::is_not_locked(self.options.is_locked())?;

    let lifestyle = match lifestyle {
      Some(lifestyle) => lifestyle,
      None => {
        // Cloned out of the options so user code never runs under their lock.
        let behavior = self.options.lifestyle_selection_behavior();
        let selected = behavior.select_lifestyle(Some(&service_type), Some(&implementation_type))?;
        tracing::trace!(
          service = service_type.name(),
          implementation = implementation_type.name(),
          lifestyle = %selected,
          "lifestyle selected"
        );
        selected
      }
    };

    let registration = Registration {
      service_type,
      implementation_type,
      lifestyle,
    };

    // Checked again under the options lock so nothing lands once `lock()` has returned.
    self.options.while_unlocked(|allow_overriding| {
      match self.registrations.entry(service_type) {
        Entry::Occupied(mut entry) => {
          if !allow_overriding {
            return Err(Error::DuplicateRegistration {
              service_type: service_type.name(),
            });
          }
          tracing::debug!(service = service_type.name(), "registration overridden");
          entry.insert(registration.clone());
        }
        Entry::Vacant(entry) => {
          entry.insert(registration.clone());
        }
      }
      Ok(())
    })?;
    Ok(registration)
  }

  // --- Lookup ---

  /// Looks up the registration for `S`.
  ///
  /// The first lookup counts as the container's first resolution and locks its options.
  pub fn get_registration<S: ?Sized + Any>(&self) -> Option<Registration> {
    self.lock();
    self
      .registrations
      .get(&TypeDescriptor::of_service::<S>())
      .map(|entry| entry.value().clone())
  }

  /// All registrations, in no particular order. Does not lock the container.
  pub fn registrations(&self) -> Vec<Registration> {
    self
      .registrations
      .iter()
      .map(|entry| entry.value().clone())
      .collect()
  }

  /// Seals the container without performing a lookup.
  pub fn lock(&self) {
    self.options.lock();
  }

  pub fn is_locked(&self) -> bool {
    self.options.is_locked()
  }
}
