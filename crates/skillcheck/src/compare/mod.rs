//! Structural comparison of actual skill output against expected fixtures.
//!
//! Expected values describe the checks to run rather than the whole shape of
//! the actual value:
//!
//! - [`matches_partial`] walks the expected value recursively. Every key (or
//!   array index) it names must exist in the actual value; scalars must be
//!   equal. Extra actual keys are ignored.
//! - [`matches_exact`] requires two ordered sequences to be deeply equal.
//! - [`same_members`] compares two lists as multisets: order is ignored,
//!   duplicates are not.
//! - [`includes_map`] requires every expected entry to be present, with a
//!   deeply equal value, in the actual map.
//!
//! A missing expectation (`None`) always passes: it means no check was asked
//! for, not that the actual value must be empty.
//!
//! Numbers compare by exact numeric value, so `1` and `1.0` are equal but
//! `0.1 + 0.2` and `0.3` are not.

use crate::error::{CheckError, CheckResult};
use serde_json::{Number, Value};

const ROOT: &str = "$";

/// Check that `actual` contains everything `expected` names.
pub fn matches_partial(actual: &Value, expected: Option<&Value>) -> CheckResult<()> {
    let Some(expected) = expected else {
        return Ok(());
    };
    match_at(ROOT, actual, expected)
}

fn match_at(path: &str, actual: &Value, expected: &Value) -> CheckResult<()> {
    match expected {
        Value::Object(fields) => {
            for (key, expected_value) in fields {
                let child = format!("{path}.{key}");
                let actual_value = actual.as_object().and_then(|object| object.get(key));
                match_child(&child, actual_value, expected_value)?;
            }
            Ok(())
        }
        Value::Array(items) => {
            for (index, expected_value) in items.iter().enumerate() {
                let child = format!("{path}[{index}]");
                let actual_value = actual.as_array().and_then(|array| array.get(index));
                match_child(&child, actual_value, expected_value)?;
            }
            Ok(())
        }
        scalar => {
            if values_equal(actual, scalar) {
                Ok(())
            } else {
                Err(CheckError::mismatch(path, scalar, Some(actual)))
            }
        }
    }
}

fn match_child(path: &str, actual: Option<&Value>, expected: &Value) -> CheckResult<()> {
    match actual {
        Some(actual) => match_at(path, actual, expected),
        None => Err(CheckError::missing_key(path, expected)),
    }
}

/// Check that two ordered sequences are deeply equal.
pub fn matches_exact(actual: &[Value], expected: Option<&[Value]>) -> CheckResult<()> {
    let Some(expected) = expected else {
        return Ok(());
    };
    if actual.len() != expected.len() {
        return Err(CheckError::cardinality("items", expected.len(), actual.len()));
    }
    for (index, (left, right)) in expected.iter().zip(actual.iter()).enumerate() {
        if !values_equal(right, left) {
            return Err(CheckError::mismatch(format!("{ROOT}[{index}]"), left, Some(right)));
        }
    }
    Ok(())
}

/// Deep equality with numeric comparison of numbers.
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => left == right,
    }
}

#[allow(clippy::float_cmp)] // exact equality, no tolerance
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a == b {
        return true;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Require two lists to hold the same members regardless of order.
///
/// Both must be lists, and every actual member must pair with a distinct
/// expected member, so duplicates count.
pub fn same_members(path: &str, actual: Option<&Value>, expected: &Value) -> CheckResult<()> {
    let (Some(actual_items), Some(expected_items)) =
        (actual.and_then(Value::as_array), expected.as_array())
    else {
        return Err(CheckError::mismatch(path, expected, actual));
    };
    if actual_items.len() != expected_items.len() {
        return Err(CheckError::mismatch(path, expected, actual));
    }
    let mut remaining: Vec<&Value> = expected_items.iter().collect();
    for item in actual_items {
        let Some(index) = remaining.iter().position(|candidate| values_equal(candidate, item))
        else {
            return Err(CheckError::mismatch(path, expected, actual));
        };
        remaining.swap_remove(index);
    }
    Ok(())
}

/// Require every entry of the expected map to appear in the actual map.
pub fn includes_map(path: &str, actual: Option<&Value>, expected: &Value) -> CheckResult<()> {
    let (Some(actual_map), Some(expected_map)) =
        (actual.and_then(Value::as_object), expected.as_object())
    else {
        return Err(CheckError::mismatch(path, expected, actual));
    };
    for (key, expected_value) in expected_map {
        let child = format!("{path}.{key}");
        match actual_map.get(key) {
            None => return Err(CheckError::missing_key(child, expected_value)),
            Some(actual_value) if !values_equal(actual_value, expected_value) => {
                return Err(CheckError::mismatch(child, expected_value, Some(actual_value)));
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Require a field to equal the expected value. An absent field reads as
/// `null`.
pub fn expect_equal(path: &str, actual: Option<&Value>, expected: &Value) -> CheckResult<()> {
    if values_equal(actual.unwrap_or(&Value::Null), expected) {
        Ok(())
    } else {
        Err(CheckError::mismatch(path, expected, actual))
    }
}
