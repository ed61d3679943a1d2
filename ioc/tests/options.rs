mod support;

use fibre_lifestyle::{
  ContainerOptions, ContainerSettings, Error, ErrorKind, Lifestyle, LifestyleSelectionBehavior,
  TypeDescriptor,
};
use pretty_assertions::assert_eq;
use std::thread;
use support::{error_chain, throws, throws_with_message_contains, trim_inside};

#[test]
fn test_changing_default_before_lock_changes_later_selections() {
  // Arrange
  let options = ContainerOptions::new();
  options.set_default_lifestyle(Lifestyle::transient()).unwrap();

  // Act
  options.set_default_lifestyle(Lifestyle::scoped()).unwrap();
  let selected = options
    .lifestyle_selection_behavior()
    .select_lifestyle(
      Some(&TypeDescriptor::of_service::<dyn Send>()),
      Some(&TypeDescriptor::of::<u32>()),
    )
    .unwrap();

  // Assert
  assert_eq!(options.default_lifestyle(), Lifestyle::scoped());
  assert_eq!(selected, Lifestyle::scoped());
}

#[test]
fn test_mutation_after_lock_fails_and_keeps_default() {
  // Arrange
  let options = ContainerOptions::new();
  options.set_default_lifestyle(Lifestyle::singleton()).unwrap();
  options.lock();

  // Act
  throws_with_message_contains(ErrorKind::InvalidState, "can't be changed", || {
    options.set_default_lifestyle(Lifestyle::scoped())
  });

  // Assert
  assert!(options.is_locked());
  assert_eq!(options.default_lifestyle(), Lifestyle::singleton());
}

#[test]
fn test_lock_wins_against_concurrent_writers() {
  let options = ContainerOptions::new();
  let writers: Vec<_> = (0..4)
    .map(|_| {
      let options = options.clone();
      thread::spawn(move || {
        (0..200)
          .map(|_| options.set_default_lifestyle(Lifestyle::scoped()))
          .collect::<Vec<_>>()
      })
    })
    .collect();
  options.lock();

  for writer in writers {
    let results = writer.join().unwrap();
    // Once a write has been rejected, no later write may succeed.
    let first_rejected = results.iter().position(Result::is_err).unwrap_or(results.len());
    assert!(results[first_rejected..].iter().all(Result::is_err));
  }
  assert!(throws(ErrorKind::InvalidState, || options.set_default_lifestyle(Lifestyle::singleton()))
    .to_string()
    .contains("locked"));
}

// --- Settings ---

#[test]
fn test_apply_settings_before_lock() {
  let options = ContainerOptions::new();
  let settings = ContainerSettings::from_yaml_str(
    "default_lifestyle: scoped\nallow_overriding_registrations: true\n",
  )
  .unwrap();

  options.apply(&settings).unwrap();

  assert_eq!(options.default_lifestyle(), Lifestyle::scoped());
  assert!(options.allow_overriding_registrations());
}

#[test]
fn test_custom_lifestyle_is_rejected_in_settings() {
  let options = ContainerOptions::new();
  let settings = ContainerSettings::from_yaml_str("default_lifestyle: custom").unwrap();

  let err = throws(ErrorKind::InvalidConfigValue, || options.apply(&settings));

  assert!(err.to_string().contains("default_lifestyle"));
  assert_eq!(options.default_lifestyle(), Lifestyle::transient());
}

#[test]
fn test_unknown_settings_field_reports_cause_chain() {
  let err = throws(ErrorKind::Settings, || {
    ContainerSettings::from_yaml_str("default_lifestyle: scoped\nverify_on_build: true")
  });

  let chain: Vec<String> = error_chain(&err).map(|e| e.to_string()).collect();

  assert!(chain.len() >= 2);
  assert!(chain[0].starts_with("Failed to parse container settings"));
  assert!(trim_inside(&chain[1]).contains("unknown field `verify_on_build`"));
  support::error_message_contains("unknown field", &err);
}

#[derive(Debug, thiserror::Error)]
#[error("Registration of the repository failed.")]
struct RegistrationFailed {
  #[source]
  source: Error,
}

#[test]
fn test_error_chain_is_outer_to_inner() {
  let yaml_error = ContainerSettings::from_yaml_str("default_lifestyle: [").unwrap_err();
  let outer = RegistrationFailed { source: yaml_error };

  let messages: Vec<String> = error_chain(&outer).map(|e| e.to_string()).collect();

  assert!(messages.len() >= 2);
  assert_eq!(messages[0], "Registration of the repository failed.");
  assert!(messages[1].starts_with("Failed to parse container settings"));
  support::error_message_contains("Failed   to parse\ncontainer settings", &outer);
}
