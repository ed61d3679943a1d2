//! # Fibre Lifestyle
//!
//! Pluggable lifestyle selection for Inversion of Control (IoC) containers.
//!
//! Every registration in a container carries a [`Lifestyle`]: the policy
//! deciding how many instances of an implementation are created and how long
//! they live. When a registration doesn't name one, the container asks its
//! installed [`LifestyleSelectionBehavior`]. The built-in
//! [`DefaultLifestyleSelectionBehavior`] answers with the container's current
//! default lifestyle; any other behavior can be swapped in before the
//! container locks.
//!
//! ## Core Concepts
//!
//! - **Lifestyle**: an immutable lifetime policy compared by identity.
//! - **ContainerOptions**: the per-container configuration. Mutable until the
//!   container locks, read-only afterwards.
//! - **Selection behavior**: the strategy picking a lifestyle from a
//!   service/implementation pair.
//! - **Container**: the registration pipeline. It locks its options on the
//!   first registration lookup.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_lifestyle::{Container, Lifestyle, ResourceAwareLifestyleSelectionBehavior};
//!
//! trait Repository {}
//!
//! struct InMemoryRepository;
//! impl Repository for InMemoryRepository {}
//!
//! struct SqlRepository {
//!   connection_string: String,
//! }
//! impl Repository for SqlRepository {}
//!
//! fn main() -> fibre_lifestyle::Result<()> {
//!   let container = Container::new();
//!   container.options().set_default_lifestyle(Lifestyle::singleton())?;
//!
//!   // Types owning a resource are scoped, everything else uses the default.
//!   let behavior =
//!     ResourceAwareLifestyleSelectionBehavior::new(container.options(), Lifestyle::scoped());
//!   container.options().set_lifestyle_selection_behavior(behavior)?;
//!
//!   let plain = container.register::<InMemoryRepository, InMemoryRepository>()?;
//!   let sql = container.register::<dyn Repository, SqlRepository>()?;
//!
//!   assert_eq!(plain.lifestyle(), &Lifestyle::singleton());
//!   assert_eq!(sql.lifestyle(), &Lifestyle::scoped());
//!
//!   // The first lookup locks the container.
//!   assert!(container.get_registration::<dyn Repository>().is_some());
//!   assert!(container.options().set_default_lifestyle(Lifestyle::transient()).is_err());
//!   Ok(())
//! }
//! ```

mod behavior;
mod container;
mod descriptor;
mod error;
mod lifestyle;
mod options;
pub mod requires;
mod settings;

pub use behavior::{
  from_fn, DefaultLifestyleSelectionBehavior, FnLifestyleSelectionBehavior,
  LifestyleSelectionBehavior, ResourceAwareLifestyleSelectionBehavior,
};
pub use container::{Container, Registration};
pub use descriptor::TypeDescriptor;
pub use error::{Error, ErrorKind, Result};
pub use lifestyle::{Lifestyle, LifestyleKind};
pub use options::ContainerOptions;
pub use settings::ContainerSettings;
