//! Assertions over captured skill output.
//!
//! The discovery validators pair every discovered device with its expected
//! record by id and run field-specific checks:
//!
//! | schema     | field                        | check                          |
//! |------------|------------------------------|--------------------------------|
//! | appliances | `actions`, `applianceTypes`  | same members                   |
//! | appliances | `additionalApplianceDetails` | map inclusion                  |
//! | endpoints  | `capabilities`               | same members of namespaces     |
//! | endpoints  | `displayCategories`          | same members                   |
//! | endpoints  | `parameters`                 | inclusion in capability params |
//! | endpoints  | `propertyMap`                | inclusion in decoded cookie    |
//! | both       | anything else                | equality                       |
//!
//! Every failure aborts the assertion with the first offending field.

use crate::capability::{capability_namespaces, capability_parameters};
use crate::compare::{
    expect_equal, includes_map, matches_exact, matches_partial, same_members,
};
use crate::error::{CheckError, CheckResult};
use crate::model::{Capability, DiscoveryKind, ResultsById};
use serde_json::{Map, Value};

/// Require the captured call log to equal the expected one exactly.
///
/// Passes without checking when `expected` is `None`.
pub fn assert_captured_calls(actual: &[Value], expected: Option<&[Value]>) -> CheckResult<()> {
    matches_exact(actual, expected)
}

/// Require the captured result to contain everything the expected record
/// names.
///
/// Passes without checking when `expected` is `None`.
pub fn assert_captured_result(actual: &Value, expected: Option<&Value>) -> CheckResult<()> {
    matches_partial(actual, expected)
}

/// Validate legacy-schema appliances against expected records keyed by
/// `applianceId`.
pub fn assert_discovered_appliances(
    appliances: &[Value],
    results: &ResultsById,
) -> CheckResult<()> {
    check_cardinality(DiscoveryKind::Appliances, appliances, results)?;
    for appliance in appliances {
        let (id, expected) = expected_record(DiscoveryKind::Appliances, appliance, results)?;
        tracing::debug!(appliance_id = %id, checks = expected.len(), "checking appliance");
        for (key, expected_value) in expected {
            let path = format!("{id}.{key}");
            let actual_value = appliance.get(key);
            match key.as_str() {
                "actions" | "applianceTypes" => {
                    same_members(&path, actual_value, expected_value)?;
                }
                "additionalApplianceDetails" => {
                    includes_map(&path, actual_value, expected_value)?;
                }
                _ => expect_equal(&path, actual_value, expected_value)?,
            }
        }
    }
    Ok(())
}

/// Validate endpoint-schema endpoints against expected records keyed by
/// `endpointId`.
pub fn assert_discovered_endpoints(endpoints: &[Value], results: &ResultsById) -> CheckResult<()> {
    check_cardinality(DiscoveryKind::Endpoints, endpoints, results)?;
    for endpoint in endpoints {
        let (id, expected) = expected_record(DiscoveryKind::Endpoints, endpoint, results)?;
        tracing::debug!(endpoint_id = %id, checks = expected.len(), "checking endpoint");
        for (key, expected_value) in expected {
            check_endpoint_field(&id, endpoint, key, expected_value)?;
        }
    }
    Ok(())
}

fn check_endpoint_field(
    id: &str,
    endpoint: &Value,
    key: &str,
    expected_value: &Value,
) -> CheckResult<()> {
    let path = format!("{id}.{key}");
    match key {
        "capabilities" => {
            let namespaces: Vec<Value> = capability_namespaces(&capabilities_of(id, endpoint)?)
                .into_iter()
                .map(Value::String)
                .collect();
            same_members(&path, Some(&Value::Array(namespaces)), expected_value)
        }
        "displayCategories" => same_members(&path, endpoint.get(key), expected_value),
        "parameters" => {
            let parameters = Value::Object(capability_parameters(&capabilities_of(id, endpoint)?));
            includes_map(&path, Some(&parameters), expected_value)
        }
        "propertyMap" => {
            let decoded = decode_property_map(id, endpoint)?;
            includes_map(&path, Some(&decoded), expected_value)
        }
        _ => expect_equal(&path, endpoint.get(key), expected_value),
    }
}

fn check_cardinality(
    kind: DiscoveryKind,
    entities: &[Value],
    results: &ResultsById,
) -> CheckResult<()> {
    if entities.len() == results.len() {
        Ok(())
    } else {
        Err(CheckError::cardinality(
            kind.label(),
            results.len(),
            entities.len(),
        ))
    }
}

/// Resolve an entity's id and the expected record stored under it.
fn expected_record<'a>(
    kind: DiscoveryKind,
    entity: &Value,
    results: &'a ResultsById,
) -> CheckResult<(String, &'a Map<String, Value>)> {
    let id = match entity.get(kind.id_field()) {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Null) | None => {
            return Err(CheckError::missing_fixture(format!(
                "<no {}>",
                kind.id_field()
            )));
        }
        Some(other) => other.to_string(),
    };
    let Some(record) = results.get(&id) else {
        return Err(CheckError::missing_fixture(id));
    };
    let Some(expected) = record.as_object() else {
        return Err(CheckError::decode(
            format!("expected record for '{id}' must be an object"),
            record,
        ));
    };
    Ok((id, expected))
}

/// Capabilities declared by an endpoint. A missing list reads as empty.
fn capabilities_of(id: &str, endpoint: &Value) -> CheckResult<Vec<Capability>> {
    match endpoint.get("capabilities") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone()).map_err(|err| {
            CheckError::decode(format!("invalid capabilities on endpoint '{id}'"), err)
        }),
    }
}

/// Decode the JSON string carried in `cookie.propertyMap`.
fn decode_property_map(id: &str, endpoint: &Value) -> CheckResult<Value> {
    let path = format!("{id}.cookie.propertyMap");
    let Some(raw) = endpoint.pointer("/cookie/propertyMap") else {
        return Err(CheckError::missing_key(path, &Value::Null));
    };
    let Some(text) = raw.as_str() else {
        return Err(CheckError::decode(
            format!("'{path}' must be a JSON-encoded string"),
            raw,
        ));
    };
    serde_json::from_str(text)
        .map_err(|err| CheckError::decode(format!("'{path}' is not valid JSON"), err))
}
