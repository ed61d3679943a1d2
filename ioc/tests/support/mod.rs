//! Assertion helpers for the crate's error contract.
#![allow(dead_code)]

use fibre_lifestyle::{Error, ErrorKind};
use std::error::Error as StdError;
use std::fmt::Debug;

/// Runs `action` and asserts it fails with an error of `expected` kind. Returns the error.
pub fn throws<T: Debug>(expected: ErrorKind, action: impl FnOnce() -> Result<T, Error>) -> Error {
  match action() {
    Ok(value) => panic!(
      "Action was expected to fail with {expected:?}, but it succeeded with {value:?}."
    ),
    Err(err) => {
      assert_eq!(
        err.kind(),
        expected,
        "Action failed with the wrong kind of error: {err}"
      );
      err
    }
  }
}

/// Asserts `action` fails with an argument error naming `expected_param_name`.
pub fn throws_with_param_name<T: Debug>(
  expected_param_name: &str,
  action: impl FnOnce() -> Result<T, Error>,
) -> Error {
  let err = throws(ErrorKind::ArgumentNull, action);
  assert_eq!(
    err.param_name(),
    Some(expected_param_name),
    "Error does not contain parameter with name: {expected_param_name}"
  );
  err
}

/// Asserts `action` fails with `expected` kind and that some error in its cause
/// chain has a message containing `expected_message`, ignoring formatting.
pub fn throws_with_message_contains<T: Debug>(
  expected: ErrorKind,
  expected_message: &str,
  action: impl FnOnce() -> Result<T, Error>,
) -> Error {
  let err = throws(expected, action);
  error_message_contains(expected_message, &err);
  err
}

pub fn error_message_contains(expected_message: &str, actual: &(dyn StdError + 'static)) {
  let expected_message = trim_inside(expected_message);
  let messages: Vec<String> = error_chain(actual)
    .map(|err| trim_inside(&err.to_string()))
    .collect();

  assert!(
    messages.iter().any(|message| message.contains(&expected_message)),
    "None of the messages in the error chain contained the expected value. \
     Expected value to be in the string: \"{expected_message}\". Error chain: {messages:#?}"
  );
}

/// Walks an error and its causes, from the outermost error to the innermost one.
pub fn error_chain<'a>(
  error: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
  std::iter::successors(Some(error), |&err| err.source())
}

/// Turns every non-space whitespace into a space, collapses runs of spaces and trims.
pub fn trim_inside(value: &str) -> String {
  value.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn string_contains(expected: &str, actual: &str, context: &str) {
  assert!(
    actual.contains(expected),
    "{context} The string did not contain the expected value. \
     Actual string: \"{actual}\". Expected value to be in the string: \"{expected}\"."
  );
}

