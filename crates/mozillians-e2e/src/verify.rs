// Scenario checks
//
// Checks return `Error::AssertionFailed` instead of panicking so a failing
// scenario is reported and classified like any other error, and its
// siblings keep running.

use crate::error::{Error, Result};
use std::fmt::Debug;

/// Fails unless `actual == expected`.
pub fn equal<T>(what: &str, expected: T, actual: T) -> Result<()>
where
    T: PartialEq + Debug,
{
    if actual == expected {
        return Ok(());
    }
    Err(Error::AssertionFailed(format!(
        "{} is incorrect. Expected: {:?}, but got: {:?}",
        what, expected, actual
    )))
}

/// Fails unless `value` holds.
pub fn is_true(what: &str, value: bool) -> Result<()> {
    if value {
        return Ok(());
    }
    Err(Error::AssertionFailed(format!("Expected {}", what)))
}

/// Fails unless `haystack` contains `needle`, ignoring ASCII case.
pub fn contains(what: &str, needle: &str, haystack: &str) -> Result<()> {
    if haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
    {
        return Ok(());
    }
    Err(Error::AssertionFailed(format!(
        "{} should mention {:?}, but was: {:?}",
        what, needle, haystack
    )))
}
