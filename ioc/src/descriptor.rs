//! Opaque descriptors for service and implementation types.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies a type taking part in a registration.
///
/// Besides identity, a descriptor records whether the type owns a resource,
/// i.e. whether dropping it runs any code. Selection behaviors can branch on it.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
  type_id: TypeId,
  name: &'static str,
  owns_resource: bool,
}

impl TypeDescriptor {
  /// Describes a sized implementation type.
  pub fn of<T: Any>() -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      name: std::any::type_name::<T>(),
      owns_resource: std::mem::needs_drop::<T>(),
    }
  }

  /// Describes a service type, which may be a trait object.
  ///
  /// Unsized types never report owning a resource.
  pub fn of_service<T: ?Sized + Any>() -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      name: std::any::type_name::<T>(),
      owns_resource: false,
    }
  }

  pub fn type_id(&self) -> TypeId {
    self.type_id
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn owns_resource(&self) -> bool {
    self.owns_resource
  }
}

impl PartialEq for TypeDescriptor {
  fn eq(&self, other: &Self) -> bool {
    self.type_id == other.type_id
  }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.type_id.hash(state);
  }
}

impl fmt::Debug for TypeDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Type({})", self.name)
  }
}
